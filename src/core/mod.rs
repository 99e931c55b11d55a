pub mod normalize;

pub use normalize::{parse_order_type, NormalizeError};

use crate::model::OrderType;

/// Translate a venue order-type token to the unified order type. One impl
/// per venue order-type enumeration; the match must cover every token the
/// venue can emit.
pub trait ToUnifiedOrderType {
    fn to_order_type(&self) -> OrderType;
}
