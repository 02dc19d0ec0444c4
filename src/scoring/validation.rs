use std::collections::HashSet;

use super::alignment::{BIG5_TRAITS, HOLLAND_TRAITS};
use super::engine::all_personality_type_ids;
use crate::catalog::{PersonalityType, Question};

/// Labels an option may legally carry: the 11 canonical trait names plus the
/// three inverted forms the normalizer knows about.
fn known_labels() -> HashSet<&'static str> {
    let mut labels: HashSet<&'static str> = HashSet::new();
    labels.extend(HOLLAND_TRAITS);
    labels.extend(BIG5_TRAITS);
    labels.insert("Introversion, low Extraversion");
    labels.insert("Neuroticism");
    labels.insert("Low Agreeableness");
    labels
}

/// Validate both catalogs against the scoring engine's data contract.
/// Returns all violations at once (not just the first).
///
/// Checks the personality-type catalog covers exactly the 30 reachable ids,
/// and that active questions have contiguous order, legal arity, unique ids,
/// unique per-question trait tags, and known alignment labels drawn from a
/// single taxonomy per question.
pub fn validate_catalogs(
    questions: &[Question],
    types: &[PersonalityType],
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    validate_personality_types(types, &mut errors);
    validate_questions(questions, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_personality_types(types: &[PersonalityType], errors: &mut Vec<String>) {
    let reachable: HashSet<String> = all_personality_type_ids().into_iter().collect();

    if types.len() != reachable.len() {
        errors.push(format!(
            "personality-types: expected {} entries, found {}",
            reachable.len(),
            types.len()
        ));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for (i, pt) in types.iter().enumerate() {
        if !seen.insert(&pt.id) {
            errors.push(format!("personality-types[{}].id: duplicate '{}'", i, pt.id));
        }
        if !reachable.contains(&pt.id) {
            errors.push(format!(
                "personality-types[{}].id: '{}' is not reachable by scoring",
                i, pt.id
            ));
        }
    }

    for id in all_personality_type_ids() {
        if !seen.contains(id.as_str()) {
            errors.push(format!("personality-types: missing id '{}'", id));
        }
    }
}

fn validate_questions(questions: &[Question], errors: &mut Vec<String>) {
    let labels = known_labels();
    let holland: HashSet<&str> = HOLLAND_TRAITS.into_iter().collect();
    let active: Vec<&Question> = questions.iter().filter(|q| q.active).collect();

    // Order must be contiguous 1..=N over active questions
    let mut orders: Vec<u32> = active.iter().map(|q| q.order).collect();
    orders.sort_unstable();
    let expected: Vec<u32> = (1..=active.len() as u32).collect();
    if orders != expected {
        errors.push(format!(
            "questions: active question order must be contiguous 1..={}, got {:?}",
            active.len(),
            orders
        ));
    }

    let mut question_ids: HashSet<&str> = HashSet::new();
    let mut option_ids: HashSet<&str> = HashSet::new();

    for q in &active {
        if !question_ids.insert(&q.id) {
            errors.push(format!("questions: duplicate question id '{}'", q.id));
        }

        if !matches!(q.options.len(), 2 | 5 | 6) {
            errors.push(format!(
                "questions[{}]: expected 2, 5, or 6 options, found {}",
                q.id,
                q.options.len()
            ));
        }

        let mut tags: HashSet<&str> = HashSet::new();
        let mut taxonomies: HashSet<bool> = HashSet::new();
        for opt in &q.options {
            if !option_ids.insert(&opt.option_id) {
                errors.push(format!(
                    "questions[{}]: duplicate option id '{}'",
                    q.id, opt.option_id
                ));
            }
            if !labels.contains(opt.option_alignment.as_str()) {
                errors.push(format!(
                    "questions[{}].options[{}]: unknown alignment label '{}'",
                    q.id, opt.option_id, opt.option_alignment
                ));
                continue;
            }
            if !tags.insert(&opt.option_alignment) {
                errors.push(format!(
                    "questions[{}]: alignment '{}' appears on more than one option",
                    q.id, opt.option_alignment
                ));
            }
            // Inverted labels all resolve into the Big5 taxonomy
            let (canonical, _) = super::alignment::normalize_alignment(&opt.option_alignment);
            taxonomies.insert(holland.contains(canonical));
        }

        if taxonomies.len() > 1 {
            errors.push(format!(
                "questions[{}]: options mix Holland and Big5 taxonomies",
                q.id
            ));
        }
    }
}
