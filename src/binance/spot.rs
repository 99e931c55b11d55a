use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::core::ToUnifiedOrderType;
use crate::model::OrderType;

/// Order types the spot order API can emit. Variant names are the raw wire
/// tokens. The margin segment trades the same set.
#[derive(Deserialize, Serialize, Debug, Display, EnumString, EnumIter, Clone, Copy, PartialEq)]
#[allow(non_camel_case_types)]
pub enum BinanceSpotOrderType {
    MARKET,
    LIMIT,
    STOP,
    STOP_LOSS,
    STOP_LOSS_LIMIT,
    TAKE_PROFIT,
    TAKE_PROFIT_LIMIT,
    LIMIT_MAKER,
}

impl ToUnifiedOrderType for BinanceSpotOrderType {
    fn to_order_type(&self) -> OrderType {
        match self {
            BinanceSpotOrderType::MARKET => OrderType::Market,
            BinanceSpotOrderType::LIMIT => OrderType::Limit,
            // STOP and STOP_LOSS are the same trigger-then-market order on
            // this segment
            BinanceSpotOrderType::STOP => OrderType::StopMarket,
            BinanceSpotOrderType::STOP_LOSS => OrderType::StopMarket,
            BinanceSpotOrderType::STOP_LOSS_LIMIT => OrderType::StopLimit,
            // TAKE_PROFIT carries no limit price and rests as a plain limit
            // once triggered; TAKE_PROFIT_LIMIT is a triggered limit
            BinanceSpotOrderType::TAKE_PROFIT => OrderType::Limit,
            BinanceSpotOrderType::TAKE_PROFIT_LIMIT => OrderType::StopLimit,
            // maker-only is an execution constraint, the order is a limit
            BinanceSpotOrderType::LIMIT_MAKER => OrderType::Limit,
        }
    }
}
