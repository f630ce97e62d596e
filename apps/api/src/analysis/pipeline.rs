//! Analysis pipeline: runs extraction, scoring and advice, then stamps a `Report`.
//!
//! `Analyzer` holds nothing but the shared reference lists, so cloning it is
//! cheap and concurrent calls never contend.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::analysis::advisor::generate_suggestions;
use crate::analysis::extractor::extract;
use crate::analysis::reference::ReferenceLists;
use crate::analysis::scorer::score;
use crate::models::report::Report;

#[derive(Debug, Clone)]
pub struct Analyzer {
    lists: Arc<ReferenceLists>,
}

impl Analyzer {
    pub fn new(lists: Arc<ReferenceLists>) -> Self {
        Self { lists }
    }

    pub fn lists(&self) -> &ReferenceLists {
        &self.lists
    }

    /// Analyzes resume text. Total over every string input: missing fields
    /// lower the score, they are not errors.
    pub fn analyze(&self, text: &str) -> Report {
        let fields = extract(text, &self.lists);
        let scores = score(&fields, text, &self.lists);
        let total_score = scores.total();

        let suggestions = generate_suggestions(
            fields.email.is_some(),
            fields.phone.is_some(),
            &fields.skills_found,
            scores.keyword_score,
        );

        debug!(
            contact = scores.contact_score,
            skills = scores.skills_score,
            keywords = scores.keyword_score,
            total = total_score,
            "Resume analyzed"
        );

        Report {
            timestamp: Utc::now(),
            email: fields.email,
            phone: fields.phone,
            skills_found: fields.skills_found,
            contact_score: scores.contact_score,
            skills_score: scores.skills_score,
            keyword_score: scores.keyword_score,
            total_score,
            suggestions: suggestions
                .into_iter()
                .map(|s| s.message().to_string())
                .collect(),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Arc::new(ReferenceLists::default()))
    }
}
