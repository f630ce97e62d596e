use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::report::{Report, ReportSummary};
use crate::state::AppState;
use crate::store::ReportOrder;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub sort: ReportOrder,
    pub limit: Option<usize>,
}

fn check_size(state: &AppState, text: &str) -> Result<(), AppError> {
    let limit = state.config.max_resume_bytes;
    if text.len() > limit {
        warn!("Rejected resume text of {} bytes (limit {limit})", text.len());
        return Err(AppError::PayloadTooLarge {
            size: text.len(),
            limit,
        });
    }
    Ok(())
}

/// POST /api/v1/analyses
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<Report>), AppError> {
    check_size(&state, &req.text)?;
    let report = state.analyzer.analyze(&req.text);
    state.store.append(&report).await?;
    info!("Stored analysis with total_score {}", report.total_score);
    Ok((StatusCode::CREATED, Json(report)))
}

/// POST /api/v1/analyses/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<Report>, AppError> {
    check_size(&state, &req.text)?;
    Ok(Json(state.analyzer.analyze(&req.text)))
}

async fn ordered_reports(state: &AppState, query: &ListQuery) -> Result<Vec<Report>, AppError> {
    if query.limit == Some(0) {
        return Err(AppError::Validation("limit must be at least 1".to_string()));
    }
    let mut reports = state.store.list_all().await?;
    query.sort.apply(&mut reports);
    if let Some(limit) = query.limit {
        reports.truncate(limit);
    }
    Ok(reports)
}

/// GET /api/v1/analyses
pub async fn handle_list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Report>>, AppError> {
    Ok(Json(ordered_reports(&state, &query).await?))
}

/// GET /api/v1/analyses/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ReportSummary>>, AppError> {
    let reports = ordered_reports(&state, &query).await?;
    Ok(Json(reports.iter().map(ReportSummary::from).collect()))
}
