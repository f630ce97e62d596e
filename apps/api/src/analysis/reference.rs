//! Reference lists: the read-only catalogues the extractor and scorer match against.
//!
//! Built once at startup and shared behind an `Arc`. Construction enforces the
//! non-empty invariant so keyword density can never divide by zero.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "sql",
    "javascript",
    "html",
    "css",
    "machine learning",
    "deep learning",
    "data analysis",
    "excel",
    "communication",
    "leadership",
    "problem solving",
];

const DEFAULT_JOB_KEYWORDS: &[&str] = &[
    "project",
    "experience",
    "team",
    "analysis",
    "development",
    "design",
    "database",
    "reporting",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Skill reference list must contain at least one entry")]
    EmptySkillList,

    #[error("Job keyword list must contain at least one entry")]
    EmptyKeywordList,

    #[error("Failed to read reference lists: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed reference lists file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A catalogue entry: the spelling reported back to callers plus its
/// lower-cased form used for matching.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub display: String,
    pub needle: String,
}

impl Term {
    fn new(raw: &str) -> Option<Self> {
        let display = raw.trim();
        if display.is_empty() {
            return None;
        }
        Some(Self {
            display: display.to_string(),
            needle: display.to_lowercase(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ReferenceLists {
    skills: Vec<Term>,
    job_keywords: Vec<Term>,
}

#[derive(Debug, Deserialize)]
struct ReferenceListsFile {
    skills: Vec<String>,
    job_keywords: Vec<String>,
}

impl ReferenceLists {
    /// Builds validated lists. Blank entries and case-insensitive repeats are
    /// dropped (the first spelling wins); an empty list after that is rejected.
    pub fn new<S, K>(skills: S, job_keywords: K) -> Result<Self, ConfigError>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        let skills = unique_terms(skills);
        let job_keywords = unique_terms(job_keywords);

        if skills.is_empty() {
            return Err(ConfigError::EmptySkillList);
        }
        if job_keywords.is_empty() {
            return Err(ConfigError::EmptyKeywordList);
        }

        Ok(Self {
            skills,
            job_keywords,
        })
    }

    /// Loads `{"skills": [...], "job_keywords": [...]}` from disk.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let file: ReferenceListsFile = serde_json::from_str(&raw)?;
        Self::new(file.skills, file.job_keywords)
    }

    pub fn skills(&self) -> &[Term] {
        &self.skills
    }

    pub fn job_keywords(&self) -> &[Term] {
        &self.job_keywords
    }
}

impl Default for ReferenceLists {
    fn default() -> Self {
        Self {
            skills: unique_terms(DEFAULT_SKILLS),
            job_keywords: unique_terms(DEFAULT_JOB_KEYWORDS),
        }
    }
}

fn unique_terms<I>(raw: I) -> Vec<Term>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(|entry| Term::new(entry.as_ref()))
        .filter(|term| seen.insert(term.needle.clone()))
        .collect()
}
