pub mod alignment;
pub mod engine;
pub mod validation;

pub use alignment::{normalize_alignment, BIG5_TRAITS, HOLLAND_TRAITS};
pub use engine::{
    all_personality_type_ids, calculate_alignment_scores, calculate_combined_scores,
    calculate_results, Answer, AnswerChoice,
};
pub use validation::validate_catalogs;
