use serde::{Deserialize, Serialize};

/// Order-type taxonomy shared across the system. Venue taxonomies map into
/// this enumeration, never back out of it.
#[derive(
    Deserialize, Serialize, Debug, strum_macros::Display, Clone, Copy, PartialOrd, PartialEq,
)]
pub enum OrderType {
    Market,
    Limit,
    StopMarket,
    StopLimit,
    TrailingStopMarket,
}
