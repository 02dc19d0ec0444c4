use anyhow::{Context, Result};
use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin.
pub fn read_line(prompt: &str) -> Result<String> {
    print!("{} ", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    Ok(input.trim().to_string())
}

/// Parse a selection like "3" or "3,1" into 0-based option indices.
///
/// Requires exactly `picks` distinct choices, each between 1 and
/// `option_count`. Order matters: the first number is the primary pick.
pub fn parse_selection(input: &str, option_count: usize, picks: usize) -> Result<Vec<usize>> {
    let numbers: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    if numbers.len() != picks {
        if picks == 1 {
            anyhow::bail!("Enter one choice (1-{})", option_count);
        }
        anyhow::bail!(
            "Enter {} choices between 1 and {}, separated by a comma",
            picks,
            option_count
        );
    }

    let mut indices = Vec::with_capacity(picks);
    for raw in numbers {
        let number: usize = raw
            .parse()
            .with_context(|| format!("'{}' is not a number", raw))?;
        if number < 1 || number > option_count {
            anyhow::bail!("Choices must be between 1 and {}", option_count);
        }
        let index = number - 1;
        if indices.contains(&index) {
            anyhow::bail!("Choices must be different options");
        }
        indices.push(index);
    }

    Ok(indices)
}
