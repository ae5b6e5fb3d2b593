//! Pagination bounds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The page size used when none is configured.
pub const DEFAULT_LIMIT_UPPER_BOUND: u32 = 50;

/// The largest offset a request may ask for. Anything outside `[0, MAX_OFFSET]` resets to 0.
pub const MAX_OFFSET: u32 = 500;

/// Pagination settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationSettings {
    /// The largest page size a request may ask for, also used when a request asks for none.
    #[serde(default = "default_limit_upper_bound")]
    pub limit_upper_bound: u32,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        PaginationSettings {
            limit_upper_bound: DEFAULT_LIMIT_UPPER_BOUND,
        }
    }
}

fn default_limit_upper_bound() -> u32 {
    DEFAULT_LIMIT_UPPER_BOUND
}
