
use crate::analysis::extractor::ExtractedFields;
use crate::analysis::reference::ReferenceLists;

const CONTACT_FIELD_POINTS: u32 = 50;
const POINTS_PER_SKILL: u32 = 10;
const MAX_SUB_SCORE: u32 = 100;

const CONTACT_WEIGHT: f64 = 0.20;
const SKILLS_WEIGHT: f64 = 0.40;
const KEYWORD_WEIGHT: f64 = 0.40;

#[derive(Debug, Clone, PartialEq)]
pub struct SubScores {
    pub contact_score: u32,
    pub skills_score: u32,
    pub keyword_score: f64,
}

/// 50 points each for an email and a phone number.
pub fn score_contact(email: Option<&str>, phone: Option<&str>) -> u32 {
    let mut score = 0;
    if email.is_some() {
        score += CONTACT_FIELD_POINTS;
    }
    if phone.is_some() {
        score += CONTACT_FIELD_POINTS;
    }
    score
}

/// 10 points per distinct skill, capped at 100.
pub fn score_skills(found_skills: &[String]) -> u32 {
    let count = u32::try_from(found_skills.len()).unwrap_or(u32::MAX);
    count.saturating_mul(POINTS_PER_SKILL).min(MAX_SUB_SCORE)
}

/// Percentage of job keywords that occur in the text (case-insensitive substring).
pub fn score_keywords(text: &str, lists: &ReferenceLists) -> f64 {
    let keywords = lists.job_keywords();
    let text_lower = text.to_lowercase();
    let matched = keywords
        .iter()
        .filter(|kw| text_lower.contains(&kw.needle))
        .count();
    // ReferenceLists guarantees at least one keyword.
    (matched as f64 / keywords.len() as f64) * 100.0
}

/// Weighted total: contact 20%, skills 40%, keywords 40%, rounded to 2 decimals.
pub fn overall_score(contact: u32, skills: u32, keywords: f64) -> f64 {
    let raw = f64::from(contact) * CONTACT_WEIGHT
        + f64::from(skills) * SKILLS_WEIGHT
        + keywords * KEYWORD_WEIGHT;
    round2(raw.clamp(0.0, f64::from(MAX_SUB_SCORE)))
}

pub fn score(fields: &ExtractedFields, text: &str, lists: &ReferenceLists) -> SubScores {
    SubScores {
        contact_score: score_contact(fields.email.as_deref(), fields.phone.as_deref()),
        skills_score: score_skills(&fields.skills_found),
        keyword_score: score_keywords(text, lists),
    }
}

impl SubScores {
    pub fn total(&self) -> f64 {
        overall_score(self.contact_score, self.skills_score, self.keyword_score)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
