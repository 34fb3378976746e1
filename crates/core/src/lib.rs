//! Core library for op-bench ─ framework-neutral operator configs and their normalization.

pub mod config;
pub mod dtype;
pub mod normalize;
pub mod projection;

pub use config::OpRecord;
pub use dtype::DType;
pub use normalize::{CapabilityMismatch, FeedSpec, OpConfig, DEFAULT_UNKNOWN_DIM};
pub use projection::Framework;
