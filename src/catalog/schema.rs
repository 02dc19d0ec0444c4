use serde::{Deserialize, Serialize};

/// One selectable option on a quiz question.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuestionOption {
    /// Unique across the entire question catalog, not just within a question
    pub option_id: String,
    pub option_text: String,
    /// Trait label fed to the scoring engine; usually a canonical trait
    /// name, occasionally one of the inverted forms
    pub option_alignment: String,
}

/// A quiz question. Arity is 6 (Holland), 5 (Big5 multi-select), or
/// 2 (Big5 binary).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Question {
    pub id: String,
    pub active: bool,
    pub question_type: String,
    pub question_text: String,
    pub options: Vec<QuestionOption>,
    /// 1-based ordinal, contiguous and unique among active questions
    pub order: u32,
}

impl Question {
    /// Binary questions take a single pick; everything else takes a ranked
    /// top two.
    pub fn max_selections(&self) -> usize {
        if self.options.len() == 2 {
            1
        } else {
            2
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecommendedCareer {
    pub onet_code: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PossibleMajor {
    pub title: String,
    pub description: String,
}

/// One of the 30 personality-type records. `id` is `{Holland}_{Big5}` and
/// must match the scoring engine's key format exactly (hyphen in
/// `Emotional-Stability` included).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PersonalityType {
    pub id: String,
    pub title: String,
    pub short_description: String,
    /// Superpower phrases joined with " - "
    pub superpowers: String,
    pub recommended_careers: Vec<RecommendedCareer>,
    pub possible_majors: Vec<PossibleMajor>,
}

impl PersonalityType {
    /// Split the superpowers field into its display phrases.
    pub fn superpower_list(&self) -> Vec<String> {
        self.superpowers
            .split(" - ")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
