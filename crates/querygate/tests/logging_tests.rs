//! Failed requests are logged once, as a structured event.

use std::io::Write;
use std::sync::{Arc, Mutex};

use query_engine_metadata::metadata::Toggles;
use querygate::QueryService;
use querygate_configuration::{Configuration, Engine};
use tests_common::fixtures::users_configuration;
use tests_common::sqlite::seed_users;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn error_lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| line.contains("ERROR"))
            .map(ToString::to_string)
            .collect()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

async fn service_for(configuration: Configuration) -> QueryService {
    let mut registry = prometheus::Registry::new();
    let service = QueryService::create(configuration, None, &mut registry)
        .await
        .unwrap();
    if let querygate::Backend::Sql { pool, .. } = &service.state().backend {
        seed_users(pool).await.unwrap();
    }
    service
}

fn capture() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::ERROR)
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

#[tokio::test]
async fn validation_failures_are_logged_once() {
    let service = service_for(users_configuration(
        Engine::Sqlite,
        "sqlite::memory:",
        Toggles::default(),
    ))
    .await;
    let (logs, _guard) = capture();

    let error = service
        .query_json(r#"{ "search": { "nickname": ["ada"] } }"#)
        .await
        .unwrap_err();

    assert_eq!(error.code(), 400_002);
    let lines = logs.error_lines();
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains("Query error"));
    assert!(lines[0].contains("code=400002"));
}

#[tokio::test]
async fn execution_failures_are_logged_once() {
    let mut configuration =
        users_configuration(Engine::Sqlite, "sqlite::memory:", Toggles::default());
    configuration.table_name = "missing".to_string();
    let service = service_for(configuration).await;
    let (logs, _guard) = capture();

    let error = service.query_json("{}").await.unwrap_err();

    assert_eq!(error.code(), 500_001);
    let lines = logs.error_lines();
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains("Query error"));
}
