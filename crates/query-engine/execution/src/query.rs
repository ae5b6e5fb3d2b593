//! Run the data fetch and the count of one request together.

use std::future::Future;
use std::time::Duration;

use crate::error::{Error, ErrorKind};

/// The default bound on a combined fetch and count.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A single result row, column name to JSON value.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// What the caller asked for besides the query itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOptions {
    pub total_count: bool,
    pub suppress_data: bool,
    pub timeout: Duration,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        ExecutionOptions {
            total_count: false,
            suppress_data: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Rows of the requested page, the number of matching rows (0 unless requested) and the
/// number of rows returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub rows: Vec<Row>,
    pub total_count: u64,
    pub size: usize,
}

/// Drive the fetch and the count concurrently and wait for both, within the timeout.
///
/// The fetch is skipped when data is suppressed and the count when it was not requested. When
/// both fail, the fetch error is reported.
pub async fn run<F, C>(
    fetch: F,
    count: C,
    options: &ExecutionOptions,
    kind: ErrorKind,
) -> Result<QueryResult, Error>
where
    F: Future<Output = Result<Vec<Row>, Error>>,
    C: Future<Output = Result<u64, Error>>,
{
    let fetch = async {
        if options.suppress_data {
            Ok(vec![])
        } else {
            fetch.await
        }
    };
    let count = async {
        if options.total_count {
            count.await
        } else {
            Ok(0)
        }
    };

    let (rows, total_count) = tokio::time::timeout(options.timeout, async {
        tokio::join!(fetch, count)
    })
    .await
    .map_err(|_| Error::Timeout {
        kind,
        after: options.timeout,
    })?;

    let rows = rows?;
    let total_count = total_count?;

    Ok(QueryResult {
        size: rows.len(),
        rows,
        total_count,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    fn row(id: i64) -> Row {
        let mut row = Row::new();
        row.insert("id".to_string(), serde_json::Value::from(id));
        row
    }

    #[tokio::test]
    async fn fetch_and_count_both_complete() {
        let options = ExecutionOptions {
            total_count: true,
            ..ExecutionOptions::default()
        };
        let result = run(
            async { Ok(vec![row(1), row(2)]) },
            async { Ok(7) },
            &options,
            ErrorKind::Sql,
        )
        .await
        .unwrap();

        assert_eq!(
            result,
            QueryResult {
                rows: vec![row(1), row(2)],
                total_count: 7,
                size: 2,
            }
        );
    }

    #[tokio::test]
    async fn suppressed_data_skips_the_fetch() {
        let fetched = AtomicBool::new(false);
        let options = ExecutionOptions {
            total_count: true,
            suppress_data: true,
            ..ExecutionOptions::default()
        };
        let result = run(
            async {
                fetched.store(true, Ordering::SeqCst);
                Ok(vec![row(1)])
            },
            async { Ok(3) },
            &options,
            ErrorKind::Sql,
        )
        .await
        .unwrap();

        assert!(!fetched.load(Ordering::SeqCst));
        assert!(result.rows.is_empty());
        assert_eq!(result.size, 0);
        assert_eq!(result.total_count, 3);
    }

    #[tokio::test]
    async fn count_is_zero_unless_requested() {
        let result = run(
            async { Ok(vec![row(1)]) },
            async { Err(Error::DocumentCount("unreachable".to_string())) },
            &ExecutionOptions::default(),
            ErrorKind::DocumentStore,
        )
        .await
        .unwrap();

        assert_eq!(result.total_count, 0);
    }

    #[tokio::test]
    async fn count_failures_are_reported_as_count_errors() {
        let options = ExecutionOptions {
            total_count: true,
            ..ExecutionOptions::default()
        };
        let error = run(
            async { Ok(vec![row(1)]) },
            async { Err(Error::DocumentCount("gone".to_string())) },
            &options,
            ErrorKind::DocumentStore,
        )
        .await
        .unwrap_err();

        assert_eq!(error.code(), 500_008);
    }

    #[tokio::test]
    async fn slow_operations_time_out() {
        let options = ExecutionOptions {
            total_count: true,
            timeout: Duration::from_millis(20),
            ..ExecutionOptions::default()
        };
        let error = run(
            async { Ok(vec![]) },
            async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(1)
            },
            &options,
            ErrorKind::Sql,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            error,
            Error::Timeout {
                kind: ErrorKind::Sql,
                ..
            }
        ));
        assert_eq!(error.code(), 500_007);
    }
}
