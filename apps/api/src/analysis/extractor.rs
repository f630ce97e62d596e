//! Extractor: pulls contact details and skill mentions out of raw resume text.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::reference::ReferenceLists;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("email pattern is valid")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{10}\b").expect("phone pattern is valid"));

/// Structured fields found in a resume. `None` means "not found".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills_found: Vec<String>,
}

/// First syntactic email address in the text.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First standalone run of exactly ten digits. Separated forms
/// like `123-456-7890` are not recognised.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// Skills from the reference list that occur anywhere in the text,
/// case-insensitively, in reference-list order.
pub fn extract_skills(text: &str, lists: &ReferenceLists) -> Vec<String> {
    let text_lower = text.to_lowercase();
    lists
        .skills()
        .iter()
        .filter(|skill| text_lower.contains(&skill.needle))
        .map(|skill| skill.display.clone())
        .collect()
}

pub fn extract(text: &str, lists: &ReferenceLists) -> ExtractedFields {
    ExtractedFields {
        email: extract_email(text),
        phone: extract_phone(text),
        skills_found: extract_skills(text, lists),
    }
}
