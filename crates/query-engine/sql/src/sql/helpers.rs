//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Where {
    Where(vec![])
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

// Expressions //

/// `column` as an expression.
pub fn column(name: &str) -> Expression {
    Expression::ColumnReference(ColumnName(name.to_string()))
}

/// `column <operator> value`.
pub fn compare(name: &str, operator: BinaryOperator, value: Value) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(column(name)),
        operator,
        right: Box::new(Expression::Value(value)),
    }
}

/// `column [NOT] IN (values...)`.
pub fn in_list(name: &str, operator: BinaryArrayOperator, values: Vec<Value>) -> Expression {
    Expression::BinaryArrayOperation {
        left: Box::new(column(name)),
        operator,
        right: values.into_iter().map(Expression::Value).collect(),
    }
}

/// Wrap a search term as a `LIKE` pattern matching it anywhere in the text.
pub fn contains_pattern(term: &str) -> Value {
    Value::String(format!("%{term}%"))
}
