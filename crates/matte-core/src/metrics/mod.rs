//! Gray metric computation and aggregation.
//!
//! - **gray**: alpha-masked average gray value for one image
//! - **aggregate**: per-directory gray values and overall mean

pub mod aggregate;
pub mod gray;

pub use aggregate::GrayAggregator;
pub use gray::average_gray;
