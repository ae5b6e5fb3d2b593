//! The generic query description a caller sends, before any validation.

pub mod request;
pub mod value;

pub use request::*;
pub use value::{Value, ValueError};
