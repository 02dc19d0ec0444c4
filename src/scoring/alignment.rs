/// Holland vocational-interest traits, in scan order.
///
/// The order is load-bearing: it drives the combined-score scan in
/// `engine::calculate_results` (first-seen-wins on ties) and the id order
/// from `engine::all_personality_type_ids`.
pub const HOLLAND_TRAITS: [&str; 6] = [
    "Investigative",
    "Artistic",
    "Social",
    "Enterprising",
    "Conventional",
    "Realistic",
];

/// Big Five temperament traits, in scan order. Same ordering caveat as
/// `HOLLAND_TRAITS`. Note the hyphen in `Emotional-Stability` is part of
/// the trait name and carries through into personality-type ids unchanged.
pub const BIG5_TRAITS: [&str; 5] = [
    "Openness",
    "Conscientiousness",
    "Extraversion",
    "Agreeableness",
    "Emotional-Stability",
];

/// Raw option labels that score against a different trait with a negative
/// multiplier. Kept as a table so the tally loop never needs to know which
/// labels are inverted.
const INVERTED_LABELS: [(&str, &str); 3] = [
    ("Introversion, low Extraversion", "Extraversion"),
    ("Neuroticism", "Emotional-Stability"),
    ("Low Agreeableness", "Agreeableness"),
];

/// Map a raw option alignment label to a canonical trait name and a signed
/// multiplier.
///
/// The three inverted labels resolve to their named trait with multiplier -1;
/// every other label resolves to itself with multiplier +1. Total over all
/// strings: an unrecognized label is its own trait name, which tallies into
/// a bucket the 30 Holland x Big5 pairings never read.
pub fn normalize_alignment(label: &str) -> (&str, i32) {
    for (raw, canonical) in INVERTED_LABELS {
        if label == raw {
            return (canonical, -1);
        }
    }
    (label, 1)
}
