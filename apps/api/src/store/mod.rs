//! Report Store: pluggable persistence for analysis reports.
//!
//! Backends:
//! - `JsonFileReportStore` (default): whole history as one JSON array,
//!   rewritten on every save.
//! - `PgReportStore`: insert-only rows in Postgres.
//! - `MemoryReportStore`: process-local, used by tests and `REPORT_STORE=memory`.
//!
//! `AppState` holds an `Arc<dyn ReportStore>`, chosen at startup via config.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::report::Report;

pub mod json_file;
pub mod memory;
pub mod postgres;

pub use json_file::JsonFileReportStore;
pub use memory::MemoryReportStore;
pub use postgres::PgReportStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt report history: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Failed to encode report history: {0}")]
    Encode(serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Append-only report log. Reports are never updated or deleted.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn append(&self, report: &Report) -> Result<(), StoreError>;

    /// Every stored report in insertion order.
    async fn list_all(&self) -> Result<Vec<Report>, StoreError>;
}

/// Ordering applied to a report listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportOrder {
    #[default]
    Inserted,
    Score,
    Date,
}

impl ReportOrder {
    pub fn apply(self, reports: &mut [Report]) {
        match self {
            ReportOrder::Inserted => {}
            ReportOrder::Score => sort_by_score_desc(reports),
            ReportOrder::Date => sort_by_timestamp_asc(reports),
        }
    }
}

/// Highest total first. Stable: equal scores keep insertion order.
pub fn sort_by_score_desc(reports: &mut [Report]) {
    reports.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
}

/// Oldest first. Stable: equal timestamps keep insertion order.
pub fn sort_by_timestamp_asc(reports: &mut [Report]) {
    reports.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
}
