//! Fixtures shared by the integration tests of several crates.

pub mod document_store;
pub mod fixtures;
pub mod sqlite;

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
