use anyhow::Result;

use super::prompt;
use crate::catalog::{self, PersonalityType, Question};
use crate::output;
use crate::scoring::{calculate_alignment_scores, calculate_results, Answer, AnswerChoice};
use crate::signups;

/// Build an engine answer from the picked option indices. Rank is the
/// position in `picks` (first = 1), and the option's alignment label is
/// denormalized onto the choice, which is all the engine ever reads.
pub fn answer_from_selection(question: &Question, picks: &[usize]) -> Answer {
    Answer {
        question_id: question.id.clone(),
        answer_choices: picks
            .iter()
            .enumerate()
            .map(|(rank_index, &option_index)| {
                let option = &question.options[option_index];
                AnswerChoice {
                    option_id: option.option_id.clone(),
                    option_alignment: option.option_alignment.clone(),
                    choice: (rank_index + 1) as u32,
                }
            })
            .collect(),
    }
}

/// Resolve a scoring result to a displayable personality type.
///
/// An empty result id means the engine found no positive signal; the session
/// falls back to the first catalog entry so the user always sees a result.
/// Returns None only for an empty catalog.
pub fn resolve_result<'a>(
    result_id: &str,
    types: &'a [PersonalityType],
) -> Option<&'a PersonalityType> {
    catalog::find_personality_type(types, result_id).or_else(|| types.first())
}

/// Run the interactive quiz: ask every active question in order, score the
/// full answer list once at completion, show the result, then offer the
/// email signup.
pub fn run_quiz(
    questions: &[Question],
    types: &[PersonalityType],
    use_colors: bool,
    verbose: bool,
) -> Result<()> {
    let active = catalog::active_in_order(questions);
    let total = active.len();
    let mut answers: Vec<Answer> = Vec::with_capacity(total);

    for (i, question) in active.iter().enumerate() {
        println!();
        println!(
            "{}",
            output::format_question(question, i + 1, total, use_colors)
        );

        let picks = loop {
            let input = prompt::read_line(">")?;
            match prompt::parse_selection(&input, question.options.len(), question.max_selections())
            {
                Ok(picks) => break picks,
                Err(e) => eprintln!("{}", e),
            }
        };

        answers.push(answer_from_selection(question, &picks));
    }

    let result_id = calculate_results(&answers);

    if verbose {
        eprintln!();
        eprintln!("{}", output::format_tally(&calculate_alignment_scores(&answers)));
        if result_id.is_empty() {
            eprintln!("No combined score exceeded 0; falling back to the first catalog entry");
        } else {
            eprintln!("Winning type: {}", result_id);
        }
    }

    let Some(personality_type) = resolve_result(&result_id, types) else {
        anyhow::bail!("Personality-type catalog is empty");
    };

    println!();
    println!("{}", output::format_result_card(personality_type, use_colors));

    offer_signup(&personality_type.id)?;

    Ok(())
}

/// Ask for an email to attach to the result. Blank input skips; invalid
/// input re-prompts.
fn offer_signup(personality_type_id: &str) -> Result<()> {
    println!();
    let email = loop {
        let input = prompt::read_line("Email to get your full results (blank to skip):")?;
        if input.is_empty() {
            return Ok(());
        }
        if signups::is_valid_email(input.trim()) {
            break input;
        }
        eprintln!("That doesn't look like an email address, try again");
    };

    let path = signups::get_signups_path();
    let mut book = signups::load_signup_book(&path)?;
    let added = book.add(&email, Some(personality_type_id.to_string()));
    if added {
        signups::save_signup_book(&path, &book)?;
        println!("You're on the list.");
    } else {
        println!("You're already on the list.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::calculate_results;

    fn active_questions() -> Vec<Question> {
        catalog::active_in_order(&catalog::embedded_questions().unwrap())
    }

    #[test]
    fn test_answer_from_selection_assigns_ranks() {
        let questions = active_questions();
        let question = &questions[0];

        let answer = answer_from_selection(question, &[2, 0]);
        assert_eq!(answer.question_id, question.id);
        assert_eq!(answer.answer_choices.len(), 2);

        assert_eq!(answer.answer_choices[0].option_id, question.options[2].option_id);
        assert_eq!(answer.answer_choices[0].choice, 1);
        assert_eq!(answer.answer_choices[1].option_id, question.options[0].option_id);
        assert_eq!(answer.answer_choices[1].choice, 2);
    }

    #[test]
    fn test_answer_carries_alignment_labels() {
        let questions = active_questions();
        let question = &questions[0];
        let answer = answer_from_selection(question, &[1]);
        assert_eq!(
            answer.answer_choices[0].option_alignment,
            question.options[1].option_alignment
        );
    }

    #[test]
    fn test_resolve_result_finds_winner() {
        let types = catalog::embedded_personality_types().unwrap();
        let resolved = resolve_result("Social_Agreeableness", &types).unwrap();
        assert_eq!(resolved.id, "Social_Agreeableness");
    }

    #[test]
    fn test_resolve_result_falls_back_to_first_entry() {
        let types = catalog::embedded_personality_types().unwrap();
        let resolved = resolve_result("", &types).unwrap();
        assert_eq!(resolved.id, types[0].id);
    }

    #[test]
    fn test_resolve_result_empty_catalog() {
        assert!(resolve_result("Artistic_Openness", &[]).is_none());
    }

    /// Simulate answering the shipped catalog with a strong preference for
    /// one trait pair.
    fn real_answers_for_type(target_holland: &str, target_big5: &str) -> Vec<Answer> {
        let questions = active_questions();
        let mut answers = Vec::with_capacity(questions.len());

        for question in &questions {
            let is_holland = question.id.starts_with('H');
            let target = if is_holland { target_holland } else { target_big5 };

            let primary = question
                .options
                .iter()
                .position(|opt| opt.option_alignment == target);

            if question.max_selections() == 1 {
                // Binary: take the target side when present, else the first
                answers.push(answer_from_selection(question, &[primary.unwrap_or(0)]));
            } else {
                let primary = primary.expect("target trait missing from multi-select question");
                let secondary = question
                    .options
                    .iter()
                    .position(|opt| opt.option_alignment != target)
                    .expect("no secondary option");
                answers.push(answer_from_selection(question, &[primary, secondary]));
            }
        }

        answers
    }

    #[test]
    fn test_all_thirty_types_reachable_with_real_catalog() {
        for holland in crate::scoring::HOLLAND_TRAITS {
            for big5 in crate::scoring::BIG5_TRAITS {
                let answers = real_answers_for_type(holland, big5);
                assert_eq!(answers.len(), 20);

                let expected = format!("{}_{}", holland, big5);
                assert_eq!(calculate_results(&answers), expected, "{}", expected);
            }
        }
    }

    #[test]
    fn test_real_quiz_answers_every_question() {
        let answers = real_answers_for_type("Artistic", "Openness");
        let questions = active_questions();
        for question in &questions {
            assert!(
                answers.iter().any(|a| a.question_id == question.id),
                "{} unanswered",
                question.id
            );
        }
    }

    #[test]
    fn test_real_quiz_selection_counts() {
        let answers = real_answers_for_type("Artistic", "Openness");
        let questions = active_questions();
        for question in &questions {
            let answer = answers.iter().find(|a| a.question_id == question.id).unwrap();
            assert_eq!(answer.answer_choices.len(), question.max_selections());
        }
    }
}
