mod schema;

pub use schema::{PersonalityType, PossibleMajor, Question, QuestionOption, RecommendedCareer};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const QUESTIONS_YAML: &str = include_str!("data/quiz-questions.yaml");
const PERSONALITY_TYPES_YAML: &str = include_str!("data/personality-types.yaml");

/// Parse the question catalog shipped with the binary.
pub fn embedded_questions() -> Result<Vec<Question>> {
    serde_saphyr::from_str(QUESTIONS_YAML).context("Failed to parse embedded question catalog")
}

/// Parse the personality-type catalog shipped with the binary.
pub fn embedded_personality_types() -> Result<Vec<PersonalityType>> {
    serde_saphyr::from_str(PERSONALITY_TYPES_YAML)
        .context("Failed to parse embedded personality-type catalog")
}

/// Load a replacement question catalog from a YAML file.
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    load_yaml(path, "question catalog")
}

/// Load a replacement personality-type catalog from a YAML file.
pub fn load_personality_types(path: &Path) -> Result<Vec<PersonalityType>> {
    load_yaml(path, "personality-type catalog")
}

fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    if !path.exists() {
        anyhow::bail!("{} not found at {}", what, path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} at {}", what, path.display()))?;

    serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse {}: invalid YAML in {}", what, path.display()))
}

/// Active questions sorted by their quiz order.
pub fn active_in_order(questions: &[Question]) -> Vec<Question> {
    let mut active: Vec<Question> = questions.iter().filter(|q| q.active).cloned().collect();
    active.sort_by_key(|q| q.order);
    active
}

/// Look up a personality type by its scoring id.
pub fn find_personality_type<'a>(
    types: &'a [PersonalityType],
    id: &str,
) -> Option<&'a PersonalityType> {
    types.iter().find(|pt| pt.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_questions_parse() {
        let questions = embedded_questions().unwrap();
        assert!(!questions.is_empty());
    }

    #[test]
    fn test_embedded_personality_types_parse() {
        let types = embedded_personality_types().unwrap();
        assert_eq!(types.len(), 30);
    }

    #[test]
    fn test_active_questions_sorted_by_order() {
        let questions = embedded_questions().unwrap();
        let active = active_in_order(&questions);
        assert_eq!(active.len(), 20);
        for (i, question) in active.iter().enumerate() {
            assert_eq!(question.order, (i + 1) as u32);
        }
    }

    #[test]
    fn test_question_mix_matches_quiz_design() {
        let active = active_in_order(&embedded_questions().unwrap());

        let holland: Vec<_> = active.iter().filter(|q| q.id.starts_with('H')).collect();
        let big5_multi: Vec<_> = active
            .iter()
            .filter(|q| q.id.starts_with("B5_") && !q.id.contains("bin"))
            .collect();
        let big5_binary: Vec<_> = active.iter().filter(|q| q.id.contains("bin")).collect();

        assert_eq!(holland.len(), 6);
        assert_eq!(big5_multi.len(), 4);
        assert_eq!(big5_binary.len(), 10);

        for q in holland {
            assert_eq!(q.options.len(), 6, "{}", q.id);
        }
        for q in big5_multi {
            assert_eq!(q.options.len(), 5, "{}", q.id);
        }
        for q in big5_binary {
            assert_eq!(q.options.len(), 2, "{}", q.id);
        }
    }

    #[test]
    fn test_binary_questions_cover_five_pairings_twice() {
        use std::collections::HashMap;

        let active = active_in_order(&embedded_questions().unwrap());
        let mut pairings: HashMap<String, u32> = HashMap::new();
        let mut trait_counts: HashMap<String, u32> = HashMap::new();

        for q in active.iter().filter(|q| q.id.contains("bin")) {
            let mut traits: Vec<&str> = q
                .options
                .iter()
                .map(|o| o.option_alignment.as_str())
                .collect();
            traits.sort_unstable();
            *pairings.entry(traits.join("_")).or_insert(0) += 1;
            for t in traits {
                *trait_counts.entry(t.to_string()).or_insert(0) += 1;
            }
        }

        // Each pairing asked twice for reliability
        assert_eq!(pairings.len(), 5);
        for (pairing, count) in &pairings {
            assert_eq!(*count, 2, "pairing {} asked {} times", pairing, count);
        }

        // Each Big5 trait appears in exactly 4 binary questions
        for trait_name in crate::scoring::BIG5_TRAITS {
            assert_eq!(trait_counts.get(trait_name), Some(&4), "{}", trait_name);
        }
    }

    #[test]
    fn test_find_personality_type() {
        let types = embedded_personality_types().unwrap();
        assert!(find_personality_type(&types, "Artistic_Openness").is_some());
        assert!(find_personality_type(&types, "Artistic_Openness2").is_none());
        assert!(find_personality_type(&types, "").is_none());
    }

    #[test]
    fn test_load_questions_missing_file() {
        let err = load_questions(Path::new("/nonexistent/questions.yaml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
