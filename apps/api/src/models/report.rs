use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed resume analysis. Immutable once the analyzer returns it;
/// stores only ever append these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub timestamp: DateTime<Utc>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills_found: Vec<String>,
    pub contact_score: u32,
    pub skills_score: u32,
    pub keyword_score: f64,
    pub total_score: f64,
    pub suggestions: Vec<String>,
}

/// Compact listing row: when the analysis ran and what it scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub timestamp: DateTime<Utc>,
    pub total_score: f64,
}

impl From<&Report> for ReportSummary {
    fn from(report: &Report) -> Self {
        Self {
            timestamp: report.timestamp,
            total_score: report.total_score,
        }
    }
}

mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de::Error, Deserialize, Deserializer};

    /// RFC 3339, or an ISO 8601 datetime without an offset, which is taken as UTC.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Report {
        Report {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            email: Some("jane@example.com".to_string()),
            phone: None,
            skills_found: vec!["python".to_string(), "sql".to_string()],
            contact_score: 50,
            skills_score: 20,
            keyword_score: 37.5,
            total_score: 33.0,
            suggestions: vec!["Include a valid 10-digit phone number.".to_string()],
        }
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = sample();
        let json = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_absent_phone_serializes_as_null() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value["phone"].is_null());
        assert_eq!(value["email"], "jane@example.com");
    }

    #[test]
    fn test_report_has_exact_field_set() {
        let value = serde_json::to_value(sample()).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "contact_score",
                "email",
                "keyword_score",
                "phone",
                "skills_found",
                "skills_score",
                "suggestions",
                "timestamp",
                "total_score",
            ]
        );
    }

    #[test]
    fn test_timestamp_without_offset_is_read_as_utc() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["timestamp"] = "2024-03-01T09:30:00.123456".into();

        let report: Report = serde_json::from_value(value).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
            + chrono::Duration::microseconds(123_456);
        assert_eq!(report.timestamp, expected);
    }

    #[test]
    fn test_timestamp_with_offset_is_normalized() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["timestamp"] = "2024-03-01T11:30:00+02:00".into();

        let report: Report = serde_json::from_value(value).unwrap();
        assert_eq!(report.timestamp, sample().timestamp);
    }

    #[test]
    fn test_unparseable_timestamp_rejected() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["timestamp"] = "yesterday".into();
        assert!(serde_json::from_value::<Report>(value).is_err());
    }

    #[test]
    fn test_summary_from_report() {
        let report = sample();
        let summary = ReportSummary::from(&report);
        assert_eq!(summary.timestamp, report.timestamp);
        assert_eq!(summary.total_score, 33.0);
    }
}
