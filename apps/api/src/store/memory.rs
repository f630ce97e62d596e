use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::report::Report;
use crate::store::{ReportStore, StoreError};

/// Process-local store. History is lost on restart.
#[derive(Default)]
pub struct MemoryReportStore {
    reports: RwLock<Vec<Report>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn append(&self, report: &Report) -> Result<(), StoreError> {
        self.reports.write().await.push(report.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Report>, StoreError> {
        Ok(self.reports.read().await.clone())
    }
}
