//! Translate search terms and conditions into SQL predicates.

use query_engine_metadata::metadata::{ConditionOperator, FieldRegistry};
use query_engine_request::{ConditionOperators, Value};
use query_engine_sql::sql;
use query_engine_sql::sql::ast::{BinaryArrayOperator, BinaryOperator};
use query_engine_sql::sql::helpers;

use super::values;
use crate::translation::validation::{ConditionField, SearchField};

/// The order in which the operators of one field are rendered.
const CONDITION_ORDER: [ConditionOperator; 6] = [
    ConditionOperator::ValuesToExactMatch,
    ConditionOperator::GreaterOrEqual,
    ConditionOperator::GreaterThan,
    ConditionOperator::LowerOrEqual,
    ConditionOperator::LowerThan,
    ConditionOperator::ValuesToExclude,
];

/// Build the WHERE clause: one OR group per search field, then every condition, all AND-ed.
pub(super) fn translate_where(
    fields: &FieldRegistry,
    search: &[SearchField],
    conditions: &[ConditionField],
) -> sql::ast::Where {
    let mut expressions: Vec<sql::ast::Expression> = search
        .iter()
        .filter(|field| !field.values.is_empty())
        .map(translate_search)
        .collect();

    for condition in conditions {
        for operator in CONDITION_ORDER {
            if let Some(expression) = translate_condition(fields, condition, operator) {
                expressions.push(expression);
            }
        }
    }

    sql::ast::Where(expressions)
}

/// `(id LIKE %a% OR id LIKE %b%)`
fn translate_search(field: &SearchField) -> sql::ast::Expression {
    sql::ast::Expression::Or(
        field
            .values
            .iter()
            .map(|value| {
                helpers::compare(
                    &field.identifier,
                    BinaryOperator::Like,
                    helpers::contains_pattern(&value.to_string()),
                )
            })
            .collect(),
    )
}

fn translate_condition(
    fields: &FieldRegistry,
    condition: &ConditionField,
    operator: ConditionOperator,
) -> Option<sql::ast::Expression> {
    let coerce = |value: &Value| {
        values::translate_sql_value(values::coerce_condition_value(
            fields,
            &condition.client_key,
            value,
        ))
    };
    let identifier = condition.identifier.as_str();
    let ConditionOperators {
        greater_than,
        greater_or_equal,
        values_to_exact_match,
        lower_than,
        lower_or_equal,
        values_to_exclude,
    } = &condition.operators;

    let compare = |value: &Option<Value>, operator| {
        value
            .as_ref()
            .map(|value| helpers::compare(identifier, operator, coerce(value)))
    };
    // empty lists render nothing rather than `IN ()`
    let in_list = |values: &Option<Vec<Value>>, operator| {
        values
            .as_ref()
            .filter(|values| !values.is_empty())
            .map(|values| helpers::in_list(identifier, operator, values.iter().map(coerce).collect()))
    };

    match operator {
        ConditionOperator::ValuesToExactMatch => {
            in_list(values_to_exact_match, BinaryArrayOperator::In)
        }
        ConditionOperator::GreaterOrEqual => {
            compare(greater_or_equal, BinaryOperator::GreaterThanOrEqualTo)
        }
        ConditionOperator::GreaterThan => compare(greater_than, BinaryOperator::GreaterThan),
        ConditionOperator::LowerOrEqual => {
            compare(lower_or_equal, BinaryOperator::LessThanOrEqualTo)
        }
        ConditionOperator::LowerThan => compare(lower_than, BinaryOperator::LessThan),
        ConditionOperator::ValuesToExclude => {
            in_list(values_to_exclude, BinaryArrayOperator::NotIn)
        }
    }
}
