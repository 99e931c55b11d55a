use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::core::ToUnifiedOrderType;
use crate::model::OrderType;

/// Order types across the order and conditional-order APIs. The venue runs
/// one cross-collateral order API, so a single set serves every segment.
#[derive(Deserialize, Serialize, Debug, Display, EnumString, EnumIter, Clone, Copy, PartialEq)]
#[allow(non_camel_case_types)]
pub enum FtxOrderType {
    market,
    limit,
    stop,
    take_profit,
    trailing_stop,
}

impl ToUnifiedOrderType for FtxOrderType {
    fn to_order_type(&self) -> OrderType {
        match self {
            FtxOrderType::market => OrderType::Market,
            FtxOrderType::limit => OrderType::Limit,
            // conditional orders trigger market execution unless an order
            // price is attached; the wire token stays the same either way
            FtxOrderType::stop => OrderType::StopMarket,
            FtxOrderType::take_profit => OrderType::StopMarket,
            FtxOrderType::trailing_stop => OrderType::TrailingStopMarket,
        }
    }
}
