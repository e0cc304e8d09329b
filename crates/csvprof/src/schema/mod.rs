//! Report types for representing a profiled table.

mod column;
mod table;
mod types;

pub use column::{ColumnProfile, ColumnStats, TopEntry};
pub use table::{Report, ReportSummary};
pub use types::{ColumnType, TopValue};
