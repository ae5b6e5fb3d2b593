//! Compile a ValidatedRequest into a backend query.

mod document;
mod fields;
mod filtering;
mod sorting;
mod sql;
pub mod values;

use query_engine_metadata::metadata::FieldRegistry;

use super::validation::ValidatedRequest;

pub use document::DocumentCompiler;
pub use sql::SqlCompiler;

/// Turns a validated request into a backend-native query.
///
/// Compilation cannot fail: anything a backend could reject has been rejected by validation.
pub trait Compiler {
    type Query;

    fn compile(&self, fields: &FieldRegistry, request: &ValidatedRequest) -> Self::Query;
}
