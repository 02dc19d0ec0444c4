use super::types::SignupBook;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the data directory path (~/.local/share/purpose-quiz/)
pub fn get_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".local").join("share").join("purpose-quiz")
}

/// Get the default signup book path (~/.local/share/purpose-quiz/signups.json)
pub fn get_signups_path() -> PathBuf {
    get_data_dir().join("signups.json")
}

/// Load the signup book from a JSON file
///
/// If the file doesn't exist, returns a new empty book.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_signup_book(path: &Path) -> Result<SignupBook> {
    if !path.exists() {
        return Ok(SignupBook::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open signup book at {}", path.display()))?;

    let book: SignupBook = serde_json::from_reader(file).context("Failed to load signup book")?;

    // Version check
    if book.version != 1 {
        anyhow::bail!("Unsupported signup book version: {}", book.version);
    }

    Ok(book)
}

/// Save the signup book to a JSON file atomically
///
/// Uses atomic-write-file so a crash mid-write never corrupts the book.
/// Creates the parent directory if it doesn't exist.
pub fn save_signup_book(path: &Path, book: &SignupBook) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory at {}", parent.display())
            })?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, book).context("Failed to serialize signup book")?;

    file.commit().context("Failed to save signup book")?;

    Ok(())
}
