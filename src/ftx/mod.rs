mod types;

pub use types::FtxOrderType;
