use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::alignment::{normalize_alignment, BIG5_TRAITS, HOLLAND_TRAITS};

/// One ranked pick within an answer. Serialized field names follow the
/// recorded-answer file format (`optionId`, `optionAlignment`, `choice`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerChoice {
    pub option_id: String,
    /// Raw alignment label of the chosen option, denormalized at answer time.
    pub option_alignment: String,
    /// 1-based rank. 1 = primary pick; anything else scores as the low tier.
    pub choice: u32,
}

/// All picks a user made for one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub answer_choices: Vec<AnswerChoice>,
}

/// Fold answers into a per-trait score map.
///
/// Every one of the 11 known traits is present in the result, initialized to
/// 0, so absent traits read as 0 rather than missing. A rank-1 pick is worth
/// 3 points, any other rank 1 point; the points are signed by the alignment
/// multiplier, so totals can go negative. Accumulation is commutative:
/// the result depends only on the multiset of (label, rank) pairs.
pub fn calculate_alignment_scores(answers: &[Answer]) -> HashMap<String, i32> {
    let mut counts: HashMap<String, i32> = HashMap::new();

    for trait_name in HOLLAND_TRAITS.iter().chain(BIG5_TRAITS.iter()) {
        counts.insert((*trait_name).to_string(), 0);
    }

    for answer in answers {
        for pick in &answer.answer_choices {
            if pick.option_alignment.is_empty() {
                continue;
            }
            let points = if pick.choice == 1 { 3 } else { 1 };
            let (trait_name, multiplier) = normalize_alignment(&pick.option_alignment);
            *counts.entry(trait_name.to_string()).or_insert(0) += points * multiplier;
        }
    }

    counts
}

/// Cross every Holland trait with every Big5 trait and multiply their
/// tallies. Always produces exactly 30 entries keyed `{Holland}_{Big5}`
/// (hyphens preserved, matching personality-type catalog ids).
pub fn calculate_combined_scores(trait_scores: &HashMap<String, i32>) -> HashMap<String, i32> {
    let mut combined = HashMap::with_capacity(HOLLAND_TRAITS.len() * BIG5_TRAITS.len());

    for holland in HOLLAND_TRAITS {
        for big5 in BIG5_TRAITS {
            let holland_score = trait_scores.get(holland).copied().unwrap_or(0);
            let big5_score = trait_scores.get(big5).copied().unwrap_or(0);
            combined.insert(format!("{}_{}", holland, big5), holland_score * big5_score);
        }
    }

    combined
}

/// Score a completed answer list and return the winning personality-type id.
///
/// Pairs are scanned Holland-outer, Big5-inner in the fixed trait order, and
/// the running best is replaced only on a strictly greater score, so ties go
/// to the earliest pair in scan order.
///
/// Returns `""` when no combined score exceeds 0, including the empty-input
/// case and the all-inverted case where every pairing is net-negative.
/// Callers own the fallback; the quiz session substitutes the first catalog
/// entry.
pub fn calculate_results(answers: &[Answer]) -> String {
    let trait_scores = calculate_alignment_scores(answers);
    let combined = calculate_combined_scores(&trait_scores);

    let mut max_alignment = String::new();
    let mut max_score = 0;

    for holland in HOLLAND_TRAITS {
        for big5 in BIG5_TRAITS {
            let key = format!("{}_{}", holland, big5);
            let score = combined.get(&key).copied().unwrap_or(0);
            if score > max_score {
                max_score = score;
                max_alignment = key;
            }
        }
    }

    max_alignment
}

/// Every personality-type id the scoring can produce, in the same nested
/// order the selector scans. The personality-type catalog must cover exactly
/// this set (see `validation::validate_catalogs`).
pub fn all_personality_type_ids() -> Vec<String> {
    let mut ids = Vec::with_capacity(HOLLAND_TRAITS.len() * BIG5_TRAITS.len());
    for holland in HOLLAND_TRAITS {
        for big5 in BIG5_TRAITS {
            ids.push(format!("{}_{}", holland, big5));
        }
    }
    ids
}
