pub mod constants;
mod order_data_model;

pub use order_data_model::OrderType;
