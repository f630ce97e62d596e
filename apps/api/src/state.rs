use std::sync::Arc;

use crate::analysis::pipeline::Analyzer;
use crate::config::Config;
use crate::store::ReportStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Stateless pipeline over the startup reference lists.
    pub analyzer: Analyzer,
    /// Pluggable report store. Default: JsonFileReportStore. Swap via REPORT_STORE env.
    pub store: Arc<dyn ReportStore>,
}
