use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use crate::models::report::Report;
use crate::store::{ReportStore, StoreError};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS analysis_reports (
    seq            BIGSERIAL PRIMARY KEY,
    timestamp      TIMESTAMPTZ NOT NULL,
    email          TEXT,
    phone          TEXT,
    skills_found   TEXT[] NOT NULL,
    contact_score  INTEGER NOT NULL,
    skills_score   INTEGER NOT NULL,
    keyword_score  DOUBLE PRECISION NOT NULL,
    total_score    DOUBLE PRECISION NOT NULL,
    suggestions    TEXT[] NOT NULL
)
"#;

#[derive(Debug, FromRow)]
struct ReportRow {
    timestamp: DateTime<Utc>,
    email: Option<String>,
    phone: Option<String>,
    skills_found: Vec<String>,
    contact_score: i32,
    skills_score: i32,
    keyword_score: f64,
    total_score: f64,
    suggestions: Vec<String>,
}

impl From<ReportRow> for Report {
    fn from(row: ReportRow) -> Self {
        Report {
            timestamp: row.timestamp,
            email: row.email,
            phone: row.phone,
            skills_found: row.skills_found,
            contact_score: u32::try_from(row.contact_score).unwrap_or(0),
            skills_score: u32::try_from(row.skills_score).unwrap_or(0),
            keyword_score: row.keyword_score,
            total_score: row.total_score,
            suggestions: row.suggestions,
        }
    }
}

/// Insert-only Postgres backend. `seq` records insertion order.
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    /// Wraps the pool and makes sure the reports table exists.
    pub async fn connect(pool: PgPool) -> Result<Self, StoreError> {
        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        info!("analysis_reports table ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn append(&self, report: &Report) -> Result<(), StoreError> {
        // Sub-scores are 0..=100.
        sqlx::query(
            r#"
            INSERT INTO analysis_reports
                (timestamp, email, phone, skills_found, contact_score,
                 skills_score, keyword_score, total_score, suggestions)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(report.timestamp)
        .bind(report.email.as_deref())
        .bind(report.phone.as_deref())
        .bind(report.skills_found.as_slice())
        .bind(report.contact_score as i32)
        .bind(report.skills_score as i32)
        .bind(report.keyword_score)
        .bind(report.total_score)
        .bind(report.suggestions.as_slice())
        .execute(&self.pool)
        .await?;

        info!("Inserted report (total_score {})", report.total_score);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Report>, StoreError> {
        let rows: Vec<ReportRow> = sqlx::query_as(
            r#"
            SELECT timestamp, email, phone, skills_found, contact_score,
                   skills_score, keyword_score, total_score, suggestions
            FROM analysis_reports
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Report::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::at;

    #[test]
    fn test_row_maps_to_report() {
        let row = ReportRow {
            timestamp: at(4),
            email: None,
            phone: Some("1234567890".to_string()),
            skills_found: vec!["sql".to_string()],
            contact_score: 50,
            skills_score: 10,
            keyword_score: 25.0,
            total_score: 24.0,
            suggestions: vec!["Add a professional email address.".to_string()],
        };

        let report = Report::from(row);
        assert_eq!(report.timestamp, at(4));
        assert_eq!(report.email, None);
        assert_eq!(report.phone.as_deref(), Some("1234567890"));
        assert_eq!(report.contact_score, 50);
        assert_eq!(report.skills_score, 10);
        assert_eq!(report.skills_found, vec!["sql"]);
    }
}
