use serde::{Deserialize, Serialize};

use strum_macros::{AsRefStr, EnumIter};
pub use strum_macros::EnumString;

#[derive(
    Serialize,
    Deserialize,
    Debug,
    EnumString,
    strum_macros::Display,
    Clone,
    Copy,
    PartialOrd,
    PartialEq,
)]
pub enum Exchanges {
    FTX,
    BINANCE,
    OKEX,
}

#[derive(
    Serialize,
    Deserialize,
    Debug,
    strum_macros::Display,
    EnumString,
    AsRefStr,
    EnumIter,
    Clone,
    Copy,
    PartialOrd,
    PartialEq,
)]
pub enum MarketSegment {
    Spot,
    Margin,
    Futures,
}
