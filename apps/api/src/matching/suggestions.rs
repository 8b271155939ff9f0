//! Suggestion engine: turns missing skills into resume improvement hints.
//!
//! The category → template mapping is data, not control flow. Categories are
//! disjoint, so the first rule that lists a skill is the only one that can.

/// One row of the rule table. `template` carries a `{skill}` placeholder.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRule {
    pub skills: &'static [&'static str],
    pub template: &'static str,
}

const SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        skills: &["python", "java", "c++"],
        template: "Add a project description highlighting {skill} applications.",
    },
    SuggestionRule {
        skills: &["tensorflow", "pytorch", "scikit-learn"],
        template: "Mention ML projects where you used {skill}.",
    },
    SuggestionRule {
        skills: &["aws", "azure", "gcp"],
        template: "Add cloud deployment/experience with {skill}.",
    },
    SuggestionRule {
        skills: &["docker", "kubernetes"],
        template: "Highlight experience in containerization using {skill}.",
    },
    SuggestionRule {
        skills: &["communication", "leadership", "teamwork"],
        template: "Include soft skills like {skill} under achievements or roles.",
    },
];

const DEFAULT_TEMPLATE: &str = "Consider mentioning experience with {skill}.";

/// Rule-table lookup. Stateless apart from the static table it is built on.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    rules: &'static [SuggestionRule],
    default_template: &'static str,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self {
            rules: SUGGESTION_RULES,
            default_template: DEFAULT_TEMPLATE,
        }
    }
}

impl SuggestionEngine {
    /// One suggestion for `skill`.
    pub fn suggest(&self, skill: &str) -> String {
        let template = self
            .rule_for(skill)
            .map(|r| r.template)
            .unwrap_or(self.default_template);
        template.replace("{skill}", skill)
    }

    /// One suggestion per missing skill, same order as the input.
    pub fn suggest_enhancements(&self, missing_skills: &[String]) -> Vec<String> {
        missing_skills.iter().map(|s| self.suggest(s)).collect()
    }

    fn rule_for(&self, skill: &str) -> Option<&SuggestionRule> {
        self.rules.iter().find(|r| r.skills.contains(&skill))
    }
}
