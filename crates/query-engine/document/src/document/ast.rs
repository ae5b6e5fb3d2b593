//! Query operators understood by the document store.

/// An operator comparing a field against one value, or a list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    In,
    GreaterThanOrEqualTo,
    GreaterThan,
    LessThanOrEqualTo,
    LessThan,
    NotIn,
}

impl ComparisonOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::In => "$in",
            ComparisonOperator::GreaterThanOrEqualTo => "$gte",
            ComparisonOperator::GreaterThan => "$gt",
            ComparisonOperator::LessThanOrEqualTo => "$lte",
            ComparisonOperator::LessThan => "$lt",
            ComparisonOperator::NotIn => "$nin",
        }
    }
}

/// An operator combining a list of filter documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "$and",
            LogicalOperator::Or => "$or",
        }
    }
}
