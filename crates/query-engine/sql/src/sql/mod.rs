//! SQL AST, a low-level SQL string representation and the conversion between them.

pub mod ast;
pub mod convert;
pub mod execution_plan;
pub mod helpers;
pub mod string;
