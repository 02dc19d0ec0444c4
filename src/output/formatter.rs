use std::collections::HashMap;
use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::catalog::{PersonalityType, Question};
use crate::scoring::{BIG5_TRAITS, HOLLAND_TRAITS};
use crate::signups::SignupRecord;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format a question with its numbered options and selection instructions
pub fn format_question(
    question: &Question,
    number: usize,
    total: usize,
    use_colors: bool,
) -> String {
    let header = format!("Question {}/{}", number, total);
    let instruction = if question.max_selections() == 1 {
        "Pick the option that best describes you."
    } else {
        "Pick your top option, then your second, separated by a comma (e.g. 3,1)."
    };

    let mut lines = Vec::with_capacity(question.options.len() + 3);
    if use_colors {
        lines.push(format!("{}", header.dimmed()));
        lines.push(format!("{}", question.question_text.bold()));
    } else {
        lines.push(header);
        lines.push(question.question_text.clone());
    }
    lines.push(instruction.to_string());

    for (i, option) in question.options.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, option.option_text));
    }

    lines.join("\n")
}

/// Format the result card for a personality type
pub fn format_result_card(personality_type: &PersonalityType, use_colors: bool) -> String {
    let mut lines = Vec::new();

    if use_colors {
        lines.push(format!(
            "{}  {}",
            personality_type.title.bold(),
            personality_type.id.cyan()
        ));
    } else {
        lines.push(format!(
            "{}  {}",
            personality_type.title, personality_type.id
        ));
    }
    lines.push(personality_type.short_description.clone());

    let superpowers = personality_type.superpower_list();
    if !superpowers.is_empty() {
        lines.push(String::new());
        lines.push("Superpowers:".to_string());
        for superpower in superpowers {
            lines.push(format!("  - {}", superpower));
        }
    }

    if !personality_type.recommended_careers.is_empty() {
        lines.push(String::new());
        lines.push("Careers to explore:".to_string());
        for career in &personality_type.recommended_careers {
            let entry = if use_colors {
                format!(
                    "  - {} ({}) - {}",
                    career.title,
                    career.onet_code.yellow(),
                    career.description
                )
            } else {
                format!(
                    "  - {} ({}) - {}",
                    career.title, career.onet_code, career.description
                )
            };
            lines.push(entry);
        }
    }

    if !personality_type.possible_majors.is_empty() {
        lines.push(String::new());
        lines.push("Majors to consider:".to_string());
        for major in &personality_type.possible_majors {
            lines.push(format!("  - {} - {}", major.title, major.description));
        }
    }

    lines.join("\n")
}

/// Format the personality-type catalog as a table: index, id, title
pub fn format_types_table(types: &[PersonalityType], use_colors: bool) -> String {
    if types.is_empty() {
        return "No personality types found.".to_string();
    }

    let term_width = get_terminal_width();
    let id_width = types.iter().map(|pt| pt.id.chars().count()).max().unwrap_or(0);

    types
        .iter()
        .enumerate()
        .map(|(idx, pt)| {
            let index_str = format!("{:>2}.", idx + 1);
            let id_padded = format!("{:<width$}", pt.id, width = id_width);

            let fixed_width = 3 + 1 + id_width + 2;
            let title = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_text(&pt.title, width - fixed_width)
                } else {
                    truncate_text(&pt.title, 20)
                }
            } else {
                pt.title.clone()
            };

            if use_colors {
                format!("{} {}  {}", index_str.dimmed(), id_padded.cyan(), title)
            } else {
                format!("{} {}  {}", index_str, id_padded, title)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the per-trait tally in the fixed scan order, Holland then Big5
pub fn format_tally(trait_scores: &HashMap<String, i32>) -> String {
    let mut lines = Vec::with_capacity(12);
    lines.push("Trait scores:".to_string());
    for trait_name in HOLLAND_TRAITS.iter().chain(BIG5_TRAITS.iter()) {
        let score = trait_scores.get(*trait_name).copied().unwrap_or(0);
        lines.push(format!("  {:<20} {:>4}", trait_name, score));
    }
    lines.join("\n")
}

/// Format signup records as a table, one per line: email, type id, date
pub fn format_signups_table(records: &[&SignupRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No signups yet.".to_string();
    }

    let email_width = records
        .iter()
        .map(|r| r.email.chars().count())
        .max()
        .unwrap_or(0);

    records
        .iter()
        .map(|record| {
            let email_padded = format!("{:<width$}", record.email, width = email_width);
            let type_id = record.personality_type_id.as_deref().unwrap_or("-");
            let date = record.created_at.format("%Y-%m-%d %H:%M");

            if use_colors {
                format!("{}  {}  {}", email_padded, type_id.cyan(), date.dimmed())
            } else {
                format!("{}  {}  {}", email_padded, type_id, date)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
