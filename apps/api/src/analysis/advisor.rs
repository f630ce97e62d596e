/// Below this many skills the resume is flagged as thin on skills.
const MIN_SKILLS: usize = 4;
/// Keyword density (percent) under which keyword advice is given.
const MIN_KEYWORD_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    AddEmail,
    AddPhone,
    AddSkills,
    AddKeywords,
    MinorImprovements,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Suggestion::AddEmail => "Add a professional email address.",
            Suggestion::AddPhone => "Include a valid 10-digit phone number.",
            Suggestion::AddSkills => "Add more relevant technical and soft skills.",
            Suggestion::AddKeywords => "Add stronger keywords related to the job description.",
            Suggestion::MinorImprovements => "Resume is strong. Minor improvements needed.",
        }
    }
}

/// Improvement tips in fixed rule order. Deficiency rules accumulate; the
/// fallback appears only when none of them fired, so the result is never empty.
pub fn generate_suggestions(
    has_email: bool,
    has_phone: bool,
    found_skills: &[String],
    keyword_score: f64,
) -> Vec<Suggestion> {
    let mut tips = Vec::new();

    if !has_email {
        tips.push(Suggestion::AddEmail);
    }
    if !has_phone {
        tips.push(Suggestion::AddPhone);
    }
    if found_skills.len() < MIN_SKILLS {
        tips.push(Suggestion::AddSkills);
    }
    if keyword_score < MIN_KEYWORD_SCORE {
        tips.push(Suggestion::AddKeywords);
    }
    if tips.is_empty() {
        tips.push(Suggestion::MinorImprovements);
    }

    tips
}
