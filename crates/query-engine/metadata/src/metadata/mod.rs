//! Metadata information regarding the exposed fields and the enabled capabilities.

pub mod fields;
pub mod pagination;
pub mod policy;

// re-export without modules
pub use fields::*;
pub use pagination::*;
pub use policy::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata information.
///
/// Constructed once when the service is configured and shared read-only by every request.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub fields_map: FieldRegistry,
    #[serde(default)]
    pub toggles: Toggles,
    #[serde(default)]
    pub pagination: PaginationSettings,
}

impl Metadata {
    pub fn empty() -> Self {
        Metadata {
            fields_map: FieldRegistry::empty(),
            toggles: Toggles::default(),
            pagination: PaginationSettings::default(),
        }
    }
}
