//! Display model for a match: sorted skill lists, labels, and the
//! suggestion block or the "matches well" note.

use serde::{Deserialize, Serialize};

use crate::matching::matcher::MatchResult;

pub const NO_MATCHED_SKILLS: &str = "None";
pub const NO_MISSING_SKILLS: &str = "🎯 None – But you can still enhance!";
pub const WELL_MATCHED_INFO: &str = "🌟 Your resume matches well! You may still add more projects, certifications, or tools to strengthen it further.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_percent_label: String,
    /// alphabetical, for display only
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_display: String,
    pub missing_display: String,
    pub suggestions: Vec<String>,
    pub info: Option<String>,
}

impl MatchReport {
    pub fn build(result: &MatchResult, suggestions: &[String]) -> Self {
        let matched_skills = sorted(&result.matched_skills);
        let missing_skills = sorted(&result.missing_skills);

        let matched_display = display_list(&matched_skills, NO_MATCHED_SKILLS);
        let missing_display = display_list(&missing_skills, NO_MISSING_SKILLS);

        let (suggestions, info) = if missing_skills.is_empty() {
            (vec![], Some(WELL_MATCHED_INFO.to_string()))
        } else {
            (suggestions.to_vec(), None)
        };

        Self {
            match_percent_label: format_percent(result.match_percent),
            matched_skills,
            missing_skills,
            matched_display,
            missing_display,
            suggestions,
            info,
        }
    }
}

fn sorted(skills: &[String]) -> Vec<String> {
    let mut out = skills.to_vec();
    out.sort();
    out
}

fn display_list(skills: &[String], empty: &str) -> String {
    if skills.is_empty() {
        empty.to_string()
    } else {
        skills.join(", ")
    }
}

/// "25%", "33.33%", "12.5%"
fn format_percent(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}%")
}
