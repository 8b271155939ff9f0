//! Skills taxonomy and stopword tables.
//!
//! Both are built once at startup and shared read-only through `AppState`.
//! Taxonomy order is the reporting order for matched and missing skills.

use std::collections::HashSet;

use serde::Serialize;

const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "sql",
    "html",
    "css",
    "javascript",
    "machine learning",
    "deep learning",
    "artificial intelligence",
    "nlp",
    "data analysis",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "django",
    "flask",
    "git",
    "github",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "linux",
    "problem solving",
    "communication",
    "leadership",
    "teamwork",
];

const DEFAULT_STOPWORDS: &[&str] = &[
    "and", "or", "the", "in", "on", "at", "to", "a", "is", "was", "that", "we", "with", "for",
    "of",
];

/// Ordered catalog of recognized skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillsTaxonomy(Vec<String>);

impl SkillsTaxonomy {
    /// Normalizes to lowercase and drops blanks and repeats, keeping first-seen order.
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.clone()))
            .collect();
        Self(skills)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SkillsTaxonomy {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}

/// Filler words dropped during keyword extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet(HashSet<String>);

impl StopwordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        )
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS)
    }
}

/// Taxonomy plus stopwords: the immutable data every match runs against.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    pub taxonomy: SkillsTaxonomy,
    pub stopwords: StopwordSet,
}
