mod aggregate;
mod filter;

pub use aggregate::{aggregate, Aggregate, Counts};
pub use filter::{filter_by_method, filter_by_status, limit, select, Criterion};
