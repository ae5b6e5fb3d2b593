/// Convert a SQL AST to a low-level SQL string.
use super::ast::*;
use super::string::*;

// Convert to SQL strings

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectList::SelectList(select_list) if !select_list.is_empty() => {
                for (index, column) in select_list.iter().enumerate() {
                    column.to_sql(sql);
                    if index < (select_list.len() - 1) {
                        sql.append_syntax(", ")
                    }
                }
            }
            SelectList::SelectList(_) | SelectList::SelectStar => {
                sql.append_syntax("*");
            }
        }
    }
}

impl Where {
    /// Render the conjuncts joined by `AND`, without the `WHERE` keyword.
    pub fn to_sql(&self, sql: &mut SQL) {
        let Where(expressions) = self;
        for (index, expression) in expressions.iter().enumerate() {
            expression.to_sql(sql);
            if index < (expressions.len() - 1) {
                sql.append_syntax(" AND ")
            }
        }
    }
}

// scalars
impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Expression::ColumnReference(column_name) => column_name.to_sql(sql),
            Expression::Or(exprs) => {
                sql.append_syntax("(");
                for (index, expr) in exprs.iter().enumerate() {
                    expr.to_sql(sql);
                    if index < (exprs.len() - 1) {
                        sql.append_syntax(" OR ")
                    }
                }
                sql.append_syntax(")");
            }
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
            }
            Expression::BinaryArrayOperation {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                sql.append_syntax("(");
                for (index, item) in right.iter().enumerate() {
                    item.to_sql(sql);
                    if index < (right.len() - 1) {
                        sql.append_syntax(", ")
                    }
                }
                sql.append_syntax(")");
            }
            Expression::Value(value) => value.to_sql(sql),
        }
    }
}

impl BinaryOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            BinaryOperator::Like => sql.append_syntax(" LIKE "),
            BinaryOperator::GreaterThan => sql.append_syntax(" > "),
            BinaryOperator::GreaterThanOrEqualTo => sql.append_syntax(" >= "),
            BinaryOperator::LessThan => sql.append_syntax(" < "),
            BinaryOperator::LessThanOrEqualTo => sql.append_syntax(" <= "),
        }
    }
}

impl BinaryArrayOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            BinaryArrayOperator::In => sql.append_syntax(" IN "),
            BinaryArrayOperator::NotIn => sql.append_syntax(" NOT IN "),
        }
    }
}

impl Value {
    /// Every value becomes a parameter, including booleans and nulls.
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_param(self.clone());
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax("ORDER BY ");
            for (index, order_by_item) in self.elements.iter().enumerate() {
                order_by_item.to_sql(sql);
                if index < (self.elements.len() - 1) {
                    sql.append_syntax(", ")
                }
            }
        }
    }
}

impl OrderByElement {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.target.to_sql(sql);
        self.direction.to_sql(sql);
    }
}

impl OrderByDirection {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            OrderByDirection::Asc => sql.append_syntax(" ASC"),
            OrderByDirection::Desc => sql.append_syntax(" DESC"),
        }
    }
}

impl Limit {
    pub fn limit_to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("LIMIT ");
        sql.append_syntax(format!("{}", self.limit).as_str());
    }

    pub fn offset_to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("OFFSET ");
        sql.append_syntax(format!("{}", self.offset).as_str());
    }

    pub fn to_sql(&self, sql: &mut SQL) {
        self.limit_to_sql(sql);
        sql.append_syntax(" ");
        self.offset_to_sql(sql);
    }
}

// names
impl TableName {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.0);
    }
}

impl ColumnName {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.0);
    }
}
