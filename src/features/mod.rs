//! Deterministic feature engineering
//!
//! This module is the shared feature path between training and serving:
//! - **buckets**: age bucketing with an explicit out-of-range policy
//! - **stats**: batch median and mode
//! - **transform**: [`transform`], the pure batch transform
//!
//! Training and inference call exactly the same [`transform`]; any change
//! here changes both sides at once, which is the point.

mod buckets;
mod stats;
mod transform;

pub use buckets::{bucket_age, AgeGroup};
pub use stats::{median, mode};
pub use transform::{transform, EngineeredRecord};
