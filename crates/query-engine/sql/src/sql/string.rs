//! Type definitions of a low-level SQL string representation.

use super::ast::Value;

/// How parameters are written into the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    /// `?` for every parameter.
    #[default]
    QuestionMark,
    /// `$1`, `$2`, ... in order of appearance.
    Numbered,
}

/// A SQL text and the parameters bound to its placeholders, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct SQL {
    pub sql: String,
    pub params: Vec<Value>,
    pub placeholder_style: PlaceholderStyle,
}

impl Default for SQL {
    fn default() -> Self {
        Self::new(PlaceholderStyle::default())
    }
}

impl SQL {
    pub fn new(placeholder_style: PlaceholderStyle) -> SQL {
        SQL {
            sql: String::new(),
            params: vec![],
            placeholder_style,
        }
    }
    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }
    /// Identifiers come from the field registry or configuration and are trusted as-is.
    pub fn append_identifier(&mut self, identifier: &str) {
        self.sql.push_str(identifier);
    }
    /// Timestamps are bound as text, so numbered placeholders cast them back to `TIMESTAMPTZ`.
    pub fn append_param(&mut self, param: Value) {
        let is_timestamp = matches!(param, Value::Timestamp(_));
        self.params.push(param);
        match self.placeholder_style {
            PlaceholderStyle::QuestionMark => self.sql.push('?'),
            PlaceholderStyle::Numbered if is_timestamp => {
                self.sql
                    .push_str(format!("CAST(${} AS TIMESTAMPTZ)", self.params.len()).as_str());
            }
            PlaceholderStyle::Numbered => {
                self.sql.push_str(format!("${}", self.params.len()).as_str());
            }
        }
    }
}
