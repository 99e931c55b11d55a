use std::str::FromStr;

use thiserror::Error;

use crate::binance::futures::BinanceFuturesOrderType;
use crate::binance::spot::BinanceSpotOrderType;
use crate::core::ToUnifiedOrderType;
use crate::ftx::FtxOrderType;
use crate::model::constants::{Exchanges, MarketSegment};
use crate::model::OrderType;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("unknown order type token {token:?} for {exchange} {segment}")]
    UnknownOrderType {
        exchange: Exchanges,
        segment: MarketSegment,
        token: String,
    },
    #[error("no order type taxonomy registered for {exchange} {segment}")]
    UnsupportedSegment {
        exchange: Exchanges,
        segment: MarketSegment,
    },
}

/// Parse a raw wire token against the taxonomy of the given venue/segment
/// and translate it to the unified order type. Unknown tokens are reported,
/// never approximated.
pub fn parse_order_type(
    exchange: Exchanges,
    segment: MarketSegment,
    token: &str,
) -> Result<OrderType, NormalizeError> {
    let parsed = match (exchange, segment) {
        // Binance margin trades the spot order-type set
        (Exchanges::BINANCE, MarketSegment::Spot) | (Exchanges::BINANCE, MarketSegment::Margin) => {
            BinanceSpotOrderType::from_str(token).map(|venue_type| venue_type.to_order_type())
        }
        (Exchanges::BINANCE, MarketSegment::Futures) => {
            BinanceFuturesOrderType::from_str(token).map(|venue_type| venue_type.to_order_type())
        }
        // FTX runs one cross-collateral order API for every segment
        (Exchanges::FTX, _) => {
            FtxOrderType::from_str(token).map(|venue_type| venue_type.to_order_type())
        }
        (exchange, segment) => {
            return Err(NormalizeError::UnsupportedSegment { exchange, segment });
        }
    };
    parsed.map_err(|_| {
        log::warn!(
            "unknown order type token from {} {}: {}",
            exchange,
            segment,
            token
        );
        NormalizeError::UnknownOrderType {
            exchange,
            segment,
            token: token.to_string(),
        }
    })
}
