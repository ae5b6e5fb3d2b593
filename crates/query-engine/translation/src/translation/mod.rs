//! Check an incoming QueryRequest against the metadata, then compile it to a backend query.

pub mod error;
pub mod query;
pub mod validation;

pub use error::{Error, ErrorKind};
pub use query::{Compiler, DocumentCompiler, SqlCompiler};
pub use validation::{validate, ValidatedRequest};
