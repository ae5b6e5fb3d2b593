//! A policy-guarded query service over a single table or collection.
//!
//! Requests are validated against the configured field registry and toggles, compiled for the
//! configured engine and run through the execution crate.

pub mod error;
pub mod explain;
pub mod query;
pub mod service;
pub mod state;

pub use error::{Error, ErrorKind, ErrorResponse};
pub use explain::CompiledQuery;
pub use query::QueryResponse;
pub use service::QueryService;
pub use state::{create_state, Backend, InitializationError, State};
