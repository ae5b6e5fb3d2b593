//! Errors for request validation.

use query_engine_metadata::metadata::{ConditionOperator, OrderDirection, Toggle};

/// A type for validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    FieldNotSearchable(String),
    FieldNotSortable(String),
    DuplicateSortField(String),
    InvalidSortDirection { field: String, direction: String },
    FieldNotProjectable(String),
    FieldNotConditionable(String),
    ToggleDisabled(Toggle),
}

/// The category of an error, for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field is unknown to the registry, or a sort direction is malformed.
    Validation,
    /// The request uses something the deployment has switched off.
    Toggle,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FieldNotSearchable(_)
            | Error::FieldNotSortable(_)
            | Error::DuplicateSortField(_)
            | Error::InvalidSortDirection { .. }
            | Error::FieldNotProjectable(_)
            | Error::FieldNotConditionable(_) => ErrorKind::Validation,
            Error::ToggleDisabled(_) => ErrorKind::Toggle,
        }
    }

    /// A stable numeric code.
    pub fn code(&self) -> u32 {
        match self {
            Error::FieldNotSortable(_)
            | Error::DuplicateSortField(_)
            | Error::InvalidSortDirection { .. } => 400_001,
            Error::FieldNotSearchable(_) => 400_002,
            Error::FieldNotProjectable(_) => 400_003,
            Error::FieldNotConditionable(_) => 400_004,
            Error::ToggleDisabled(toggle) => toggle_code(*toggle),
        }
    }
}

fn toggle_code(toggle: Toggle) -> u32 {
    match toggle {
        Toggle::Sorting => 400_005,
        Toggle::Search => 400_006,
        Toggle::Projection => 400_007,
        Toggle::Conditioning => 400_008,
        Toggle::Pagination => 400_009,
        Toggle::Operator(ConditionOperator::GreaterThan) => 400_010,
        Toggle::Operator(ConditionOperator::GreaterOrEqual) => 400_011,
        Toggle::Operator(ConditionOperator::LowerThan) => 400_012,
        Toggle::Operator(ConditionOperator::LowerOrEqual) => 400_013,
        Toggle::Operator(ConditionOperator::ValuesToExclude) => 400_014,
        Toggle::Operator(ConditionOperator::ValuesToExactMatch) => 400_015,
        Toggle::Direction(OrderDirection::Asc) => 400_016,
        Toggle::Direction(OrderDirection::Desc) => 400_017,
    }
}

/// Display errors.
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::FieldNotSearchable(field) => {
                write!(f, "Field '{field}' is not allowed for search.")
            }
            Error::FieldNotSortable(field) => {
                write!(f, "Field '{field}' is not allowed for sorting.")
            }
            Error::DuplicateSortField(field) => {
                write!(f, "Field '{field}' sorts on a column that is already sorted on.")
            }
            Error::InvalidSortDirection { field, direction } => write!(
                f,
                "Sort condition '{direction}' on field '{field}' must be ASC or DESC."
            ),
            Error::FieldNotProjectable(field) => {
                write!(f, "Field '{field}' is not allowed for projection.")
            }
            Error::FieldNotConditionable(field) => {
                write!(f, "Field '{field}' is not allowed for conditions.")
            }
            Error::ToggleDisabled(toggle) => {
                write!(f, "{} toggle is set.", toggle.name())
            }
        }
    }
}

impl std::error::Error for Error {}
