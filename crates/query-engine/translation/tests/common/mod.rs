use std::fs;
use std::path::PathBuf;

use query_engine_metadata::metadata::Metadata;
use query_engine_request::QueryRequest;
use query_engine_sql::sql;
use query_engine_translation::translation::{self, Compiler, SqlCompiler};

/// Read the metadata and the request of a golden file directory.
pub fn read_goldenfile(testname: &str) -> anyhow::Result<(Metadata, QueryRequest)> {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let metadata = serde_json::from_str(&fs::read_to_string(directory.join("metadata.json"))?)?;
    let request = serde_json::from_str(&fs::read_to_string(directory.join("request.json"))?)?;

    Ok((metadata, request))
}

/// Validate and compile a golden file request to SQL, and render the query with its parameters.
pub fn test_translation(
    testname: &str,
    placeholder_style: sql::string::PlaceholderStyle,
) -> anyhow::Result<String> {
    let (metadata, request) = read_goldenfile(testname)?;

    let validated = translation::validate(&metadata, &request)?;
    let compiled = SqlCompiler::new(placeholder_style).compile(&metadata.fields_map, &validated);
    let query = compiled.query_sql(&sql::ast::TableName("users".to_string()));

    let params: Vec<(usize, &sql::ast::Value)> = query
        .params
        .iter()
        .enumerate()
        .map(|(i, p)| (i + 1, p))
        .collect();

    Ok(format!("{}\n\n{:?}", query.sql, params))
}
