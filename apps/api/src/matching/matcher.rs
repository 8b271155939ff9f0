//! Matcher: compares resume keywords against job-description keywords.
//!
//! Algorithm:
//! 1. Tokenize both texts independently.
//! 2. matched = resume ∩ job, missing = job − resume (raw token sets).
//! 3. Project both onto the taxonomy, in taxonomy order.
//! 4. Score per `ScoreBasis`:
//!    - `AllTokens`: |matched| / |job| × 100 over raw tokens, including
//!      words outside the taxonomy. The displayed skill lists are still
//!      taxonomy-restricted.
//!    - `TaxonomyOnly`: matched skills / (matched + missing skills) × 100.
//! 5. Round to 2 decimal places. Empty denominator → 0.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::taxonomy::{SkillsTaxonomy, Vocabulary};
use crate::matching::tokenizer::{extract_keywords, TokenSet};

/// What the match percentage is computed over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBasis {
    #[default]
    AllTokens,
    TaxonomyOnly,
}

impl FromStr for ScoreBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all_tokens" => Ok(ScoreBasis::AllTokens),
            "taxonomy_only" => Ok(ScoreBasis::TaxonomyOnly),
            other => Err(format!(
                "unknown score basis '{other}' (expected all_tokens or taxonomy_only)"
            )),
        }
    }
}

/// Outcome of one resume/job comparison. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// 0.0 – 100.0, rounded to 2 decimals
    pub match_percent: f64,
    /// raw resume ∩ job token count
    pub matched_token_count: usize,
    /// raw job token count
    pub job_token_count: usize,
    pub score_basis: ScoreBasis,
}

/// Compares `resume_text` with `job_text` against `vocabulary`.
pub fn compute_match(
    resume_text: &str,
    job_text: &str,
    vocabulary: &Vocabulary,
    basis: ScoreBasis,
) -> MatchResult {
    let resume_tokens = extract_keywords(resume_text, &vocabulary.stopwords);
    let job_tokens = extract_keywords(job_text, &vocabulary.stopwords);

    let matched_tokens: TokenSet = job_tokens.intersection(&resume_tokens).cloned().collect();
    let missing_tokens: TokenSet = job_tokens.difference(&resume_tokens).cloned().collect();

    let matched_skills = project_onto(&vocabulary.taxonomy, &matched_tokens);
    let missing_skills = project_onto(&vocabulary.taxonomy, &missing_tokens);

    let match_percent = match basis {
        ScoreBasis::AllTokens => percent(matched_tokens.len(), job_tokens.len()),
        ScoreBasis::TaxonomyOnly => percent(
            matched_skills.len(),
            matched_skills.len() + missing_skills.len(),
        ),
    };

    debug!(
        resume_tokens = resume_tokens.len(),
        job_tokens = job_tokens.len(),
        matched_tokens = matched_tokens.len(),
        matched_skills = matched_skills.len(),
        missing_skills = missing_skills.len(),
        match_percent,
        "Computed keyword match"
    );

    MatchResult {
        matched_skills,
        missing_skills,
        match_percent,
        matched_token_count: matched_tokens.len(),
        job_token_count: job_tokens.len(),
        score_basis: basis,
    }
}

/// Taxonomy entries present in `tokens`, in taxonomy order.
fn project_onto(taxonomy: &SkillsTaxonomy, tokens: &TokenSet) -> Vec<String> {
    taxonomy
        .iter()
        .filter(|skill| tokens.contains(*skill))
        .map(String::from)
        .collect()
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
