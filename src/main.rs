use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 2;
const EXIT_DATA: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the quiz interactively (default if no subcommand)
    Take,
    /// Score a recorded answers file (YAML or JSON) and print the result
    Score {
        /// Path to the answers file
        file: PathBuf,
    },
    /// List the 30 personality types
    Types {
        /// Print bare ids, one per line, for scripting
        #[arg(long)]
        ids: bool,
    },
    /// Validate the catalogs and print every violation
    Validate,
    /// Inspect collected email signups
    Signups {
        #[command(subcommand)]
        action: SignupsAction,
    },
}

#[derive(Subcommand, Debug)]
enum SignupsAction {
    /// List signups, most recent first
    List,
    /// Export signups as CSV to stdout
    Export,
}

#[derive(Parser, Debug)]
#[command(name = "purpose-quiz")]
#[command(about = "Personality quiz CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a replacement question catalog (defaults to the embedded one)
    #[arg(long, global = true)]
    questions: Option<PathBuf>,

    /// Path to a replacement personality-type catalog (defaults to the embedded one)
    #[arg(long, global = true)]
    types_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Take);

    // Load catalogs
    let questions = match cli.questions {
        Some(ref path) => purpose_quiz::catalog::load_questions(path),
        None => purpose_quiz::catalog::embedded_questions(),
    };
    let questions = match questions {
        Ok(q) => q,
        Err(e) => {
            eprintln!("Catalog error: {:#}", e);
            std::process::exit(EXIT_IO);
        }
    };

    let types = match cli.types_file {
        Some(ref path) => purpose_quiz::catalog::load_personality_types(path),
        None => purpose_quiz::catalog::embedded_personality_types(),
    };
    let types = match types {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Catalog error: {:#}", e);
            std::process::exit(EXIT_IO);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded {} questions ({} active) and {} personality types",
            questions.len(),
            questions.iter().filter(|q| q.active).count(),
            types.len()
        );
    }

    // Validate catalogs at startup; the validate subcommand reports,
    // everything else refuses to run against broken data
    let validation = purpose_quiz::scoring::validate_catalogs(&questions, &types);
    if let Commands::Validate = command {
        match validation {
            Ok(()) => {
                println!("Catalogs are valid: {} questions, {} personality types", questions.len(), types.len());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(errors) => {
                eprintln!("Catalog violations:");
                for error in &errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_DATA);
            }
        }
    }
    if let Err(errors) = validation {
        eprintln!("Catalog violations:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_DATA);
    }

    let use_colors = purpose_quiz::output::should_use_colors();

    match command {
        Commands::Take => {
            if let Err(e) = purpose_quiz::quiz::run_quiz(&questions, &types, use_colors, cli.verbose)
            {
                eprintln!("Quiz error: {:#}", e);
                std::process::exit(EXIT_IO);
            }
        }
        Commands::Score { file } => {
            let answers = match load_answers(&file) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Answers error: {:#}", e);
                    std::process::exit(EXIT_DATA);
                }
            };

            if cli.verbose {
                eprintln!("Scoring {} answers from {}", answers.len(), file.display());
            }

            let result_id = purpose_quiz::scoring::calculate_results(&answers);

            if cli.verbose {
                let tally = purpose_quiz::scoring::calculate_alignment_scores(&answers);
                eprintln!("{}", purpose_quiz::output::format_tally(&tally));
            }

            if result_id.is_empty() {
                println!("(no result: no positive signal)");
            } else {
                println!("{}", result_id);
            }
        }
        Commands::Types { ids } => {
            if ids {
                for id in purpose_quiz::scoring::all_personality_type_ids() {
                    println!("{}", id);
                }
            } else {
                println!(
                    "{}",
                    purpose_quiz::output::format_types_table(&types, use_colors)
                );
            }
        }
        Commands::Validate => unreachable!("handled above"),
        Commands::Signups { action } => {
            let path = purpose_quiz::signups::get_signups_path();
            let book = match purpose_quiz::signups::load_signup_book(&path) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("Signup store error: {:#}", e);
                    std::process::exit(EXIT_IO);
                }
            };

            if cli.verbose {
                eprintln!("Loaded {} signups from {}", book.signups.len(), path.display());
            }

            match action {
                SignupsAction::List => {
                    println!(
                        "{}",
                        purpose_quiz::output::format_signups_table(
                            &book.recent_first(),
                            use_colors
                        )
                    );
                }
                SignupsAction::Export => {
                    println!("{}", book.to_csv());
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Read an answers file. JSON files go through serde_json; everything else
/// is treated as YAML.
fn load_answers(path: &std::path::Path) -> anyhow::Result<Vec<purpose_quiz::scoring::Answer>> {
    use anyhow::Context;

    if !path.exists() {
        anyhow::bail!("Answers file not found at {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file at {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse answers: invalid JSON in {}", path.display()))
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse answers: invalid YAML in {}", path.display()))
    }
}
