//! Document-store query representation.
pub mod document;
