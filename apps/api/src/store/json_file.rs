use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::models::report::Report;
use crate::store::{ReportStore, StoreError};

/// Keeps the full report history as one pretty-printed JSON array.
///
/// Every append reads the file, pushes the report, and rewrites the whole
/// file through a sibling temp file that is renamed over the target. The
/// mutex serializes readers and writers inside this process only.
pub struct JsonFileReportStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// A missing file is an empty history.
    async fn load(&self) -> Result<Vec<Report>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    async fn save(&self, reports: &[Report]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }
        let body = serde_json::to_string_pretty(reports).map_err(StoreError::Encode)?;
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!("Wrote {} reports to {}", reports.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl ReportStore for JsonFileReportStore {
    async fn append(&self, report: &Report) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut reports = self.load().await?;
        reports.push(report.clone());
        self.save(&reports).await?;
        info!(
            "Appended report (total_score {}) to {}",
            report.total_score,
            self.path.display()
        );
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Report>, StoreError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }
}
