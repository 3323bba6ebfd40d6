//! Metrics for the student store.
//!
//! Every store operation is timed into `student_store_duration_seconds`, labelled
//! with the operation and whether it succeeded. Failed operations also bump
//! `student_store_errors_total`.

use metrics::{counter, gauge, histogram};
use sqlx::PgPool;
use std::future::Future;
use std::time::Instant;

/// A database round trip made by [`crate::StudentContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    ListStudents,
    FindStudent,
    SaveChanges,
}

impl StoreOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreOperation::ListStudents => "list_students",
            StoreOperation::FindStudent => "find_student",
            StoreOperation::SaveChanges => "save_changes",
        }
    }
}

fn outcome_label<T, E>(result: &Result<T, E>) -> &'static str {
    if result.is_ok() {
        "ok"
    } else {
        "error"
    }
}

/// Awaits `fut` and records how long it took and whether it failed.
pub async fn timed<T, E, F>(operation: StoreOperation, fut: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let start = Instant::now();
    let result = fut.await;
    let outcome = outcome_label(&result);

    histogram!(
        "student_store_duration_seconds",
        "operation" => operation.as_str(),
        "outcome" => outcome
    )
    .record(start.elapsed().as_secs_f64());

    if result.is_err() {
        counter!("student_store_errors_total", "operation" => operation.as_str()).increment(1);
    }
    result
}

/// Point-in-time view of the connection pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub size: u32,
    pub idle: u32,
}

impl PoolStats {
    pub fn from_pool(pool: &PgPool) -> Self {
        Self {
            size: pool.size(),
            idle: pool.num_idle() as u32,
        }
    }

    /// Connections currently checked out.
    pub fn active(&self) -> u32 {
        self.size.saturating_sub(self.idle)
    }

    /// Publishes the snapshot as `database_connections{state=...}` gauges.
    pub fn record(&self) {
        gauge!("database_connections", "state" => "active").set(self.active() as f64);
        gauge!("database_connections", "state" => "idle").set(self.idle as f64);
    }
}
