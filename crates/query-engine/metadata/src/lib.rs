//! Deployment-supplied information the query engine consults: which client keys map to which
//! trusted identifiers, which capabilities are switched off, and how pagination is bounded.

pub mod metadata;
