//! Operators and the compiled query shape for document stores.

pub mod ast;
pub mod query;

pub use ast::{ComparisonOperator, LogicalOperator};
pub use query::DocumentQuery;
