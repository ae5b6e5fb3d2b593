//! The compiled document-store query and helpers to build its filter.

use bson::{doc, Bson, Document, Regex};

use super::ast::{ComparisonOperator, LogicalOperator};

/// A compiled query for a single collection.
///
/// `None` documents mean "no filter", "every field" and "natural order" respectively.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentQuery {
    pub filter: Option<Document>,
    pub projection: Option<Document>,
    pub sort: Option<Document>,
    pub limit: i64,
    pub skip: u64,
}

impl DocumentQuery {
    /// The filter to run, `{}` when nothing filters. Used for the count as well.
    pub fn filter_or_empty(&self) -> Document {
        self.filter.clone().unwrap_or_else(match_all)
    }

    /// A relaxed extended JSON view, for logging and printing.
    pub fn to_json(&self) -> serde_json::Value {
        let as_json = |document: &Option<Document>| match document {
            Some(document) => Bson::Document(document.clone()).into_relaxed_extjson(),
            None => serde_json::Value::Null,
        };
        serde_json::json!({
            "filter": as_json(&self.filter),
            "projection": as_json(&self.projection),
            "sort": as_json(&self.sort),
            "limit": self.limit,
            "skip": self.skip,
        })
    }
}

/// `{ field: { $op: value } }`
pub fn comparison(field: &str, operator: ComparisonOperator, value: Bson) -> Document {
    let mut inner = Document::new();
    inner.insert(operator.as_str(), value);
    let mut outer = Document::new();
    outer.insert(field, inner);
    outer
}

/// `{ field: /pattern/i }`
pub fn case_insensitive_regex(field: &str, pattern: String) -> Document {
    let mut document = Document::new();
    document.insert(
        field,
        Bson::RegularExpression(Regex {
            pattern,
            options: "i".to_string(),
        }),
    );
    document
}

/// `{ $and: [...] }` or `{ $or: [...] }`
pub fn combine(operator: LogicalOperator, documents: Vec<Document>) -> Document {
    let array: Vec<Bson> = documents.into_iter().map(Bson::Document).collect();
    let mut document = Document::new();
    document.insert(operator.as_str(), array);
    document
}

/// `{ field: 1 }` for every field, in order.
pub fn include_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Document {
    let mut document = Document::new();
    for field in fields {
        document.insert(field, 1_i32);
    }
    document
}

/// `{}`, the filter that matches every document.
pub fn match_all() -> Document {
    doc! {}
}
