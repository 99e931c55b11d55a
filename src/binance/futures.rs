use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::core::ToUnifiedOrderType;
use crate::model::OrderType;

/// Order types the USD-margined futures order API can emit. Several token
/// names overlap with the spot segment but mean different orders there.
#[derive(Deserialize, Serialize, Debug, Display, EnumString, EnumIter, Clone, Copy, PartialEq)]
#[allow(non_camel_case_types)]
pub enum BinanceFuturesOrderType {
    MARKET,
    LIMIT,
    STOP,
    STOP_MARKET,
    TAKE_PROFIT,
    TAKE_PROFIT_MARKET,
    TRAILING_STOP_MARKET,
}

impl ToUnifiedOrderType for BinanceFuturesOrderType {
    fn to_order_type(&self) -> OrderType {
        match self {
            BinanceFuturesOrderType::MARKET => OrderType::Market,
            BinanceFuturesOrderType::LIMIT => OrderType::Limit,
            // STOP and TAKE_PROFIT carry an explicit limit price on this
            // segment, unlike their spot namesakes
            BinanceFuturesOrderType::STOP => OrderType::StopLimit,
            BinanceFuturesOrderType::STOP_MARKET => OrderType::StopMarket,
            BinanceFuturesOrderType::TAKE_PROFIT => OrderType::StopLimit,
            BinanceFuturesOrderType::TAKE_PROFIT_MARKET => OrderType::StopMarket,
            BinanceFuturesOrderType::TRAILING_STOP_MARKET => OrderType::TrailingStopMarket,
        }
    }
}
