//! Column classification and aggregation.

mod aggregator;
mod classifier;
mod missing;

pub use aggregator::{DEFAULT_TOP_K, aggregate};
pub use classifier::{infer_type, parse_number};
pub use missing::{MISSING_TOKENS, Partition, is_missing};
