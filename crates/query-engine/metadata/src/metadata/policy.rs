//! The policy tree: deployment-level switches that disable whole capabilities or single
//! operators and sort directions.
//!
//! The tree mirrors the configuration format. Evaluation goes through [`Toggle`], a flat
//! table of every rejecting switch, so validation can walk all of them generically.

use enum_iterator::Sequence;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A comparison operator a condition can use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum ConditionOperator {
    GreaterThan,
    GreaterOrEqual,
    LowerThan,
    LowerOrEqual,
    ValuesToExclude,
    ValuesToExactMatch,
}

impl ConditionOperator {
    /// The key of the operator in an inbound condition object.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GreaterThan => "greaterThan",
            Self::GreaterOrEqual => "greaterOrEqual",
            Self::LowerThan => "lowerThan",
            Self::LowerOrEqual => "lowerOrEqual",
            Self::ValuesToExclude => "valuesToExclude",
            Self::ValuesToExactMatch => "valuesToExactMatch",
        }
    }
}

/// A sort direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize, JsonSchema,
)]
pub enum OrderDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl OrderDirection {
    /// Parse a sort token. Only the exact, upper-case tokens are accepted.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "ASC" => Some(OrderDirection::Asc),
            "DESC" => Some(OrderDirection::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// Every switch of the policy tree that rejects a request. `disable_total_count` is not one of
/// them: it clears the flag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum Toggle {
    Search,
    Projection,
    Sorting,
    Pagination,
    Conditioning,
    Operator(ConditionOperator),
    Direction(OrderDirection),
}

impl Toggle {
    /// The configuration name of the switch.
    pub fn name(&self) -> &'static str {
        match self {
            Toggle::Search => "DisableSearch",
            Toggle::Projection => "DisableProjection",
            Toggle::Sorting => "DisableSorting",
            Toggle::Pagination => "DisablePagination",
            Toggle::Conditioning => "DisableConditioning",
            Toggle::Operator(operator) => match operator {
                ConditionOperator::GreaterThan => "DisableGreaterThan",
                ConditionOperator::GreaterOrEqual => "DisableGreaterOrEqual",
                ConditionOperator::LowerThan => "DisableLowerThan",
                ConditionOperator::LowerOrEqual => "DisableLowerOrEqual",
                ConditionOperator::ValuesToExclude => "DisableValuesToExclude",
                ConditionOperator::ValuesToExactMatch => "DisableValuesToExactMatch",
            },
            Toggle::Direction(OrderDirection::Asc) => "DisableLowToHigh",
            Toggle::Direction(OrderDirection::Desc) => "DisableHighToLow",
        }
    }
}

impl std::fmt::Display for Toggle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Capability level switches. Everything is enabled by default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Toggles {
    pub disable_search: bool,
    pub disable_projection: bool,
    pub disable_sorting: bool,
    pub disable_conditioning: bool,
    pub disable_pagination: bool,
    /// Silently drops total count requests instead of rejecting them.
    pub disable_total_count: bool,
    pub sorting_toggles: SortingToggles,
    pub conditioning_toggles: ConditioningToggles,
}

/// Sort direction switches.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SortingToggles {
    pub disable_high_to_low: bool,
    pub disable_low_to_high: bool,
}

/// Condition operator switches.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditioningToggles {
    pub disable_greater_than: bool,
    pub disable_greater_or_equal: bool,
    pub disable_values_to_exact_match: bool,
    pub disable_lower_than: bool,
    pub disable_lower_or_equal: bool,
    pub disable_values_to_exclude: bool,
}

impl Toggles {
    /// Look up a single switch.
    pub fn is_disabled(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Search => self.disable_search,
            Toggle::Projection => self.disable_projection,
            Toggle::Sorting => self.disable_sorting,
            Toggle::Pagination => self.disable_pagination,
            Toggle::Conditioning => self.disable_conditioning,
            Toggle::Operator(operator) => {
                let toggles = &self.conditioning_toggles;
                match operator {
                    ConditionOperator::GreaterThan => toggles.disable_greater_than,
                    ConditionOperator::GreaterOrEqual => toggles.disable_greater_or_equal,
                    ConditionOperator::LowerThan => toggles.disable_lower_than,
                    ConditionOperator::LowerOrEqual => toggles.disable_lower_or_equal,
                    ConditionOperator::ValuesToExclude => toggles.disable_values_to_exclude,
                    ConditionOperator::ValuesToExactMatch => {
                        toggles.disable_values_to_exact_match
                    }
                }
            }
            Toggle::Direction(OrderDirection::Asc) => self.sorting_toggles.disable_low_to_high,
            Toggle::Direction(OrderDirection::Desc) => self.sorting_toggles.disable_high_to_low,
        }
    }
}
