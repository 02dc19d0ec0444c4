use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupBook {
    pub version: u32,
    #[serde(default)]
    pub signups: Vec<SignupRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRecord {
    pub email: String,
    /// Personality type the signup came from, if the quiz produced one
    pub personality_type_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Trim and lowercase an email address before storage or lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Syntactic email check: one `@`, non-empty local part, a dot somewhere
/// inside the domain, no whitespace anywhere. Matches the acceptance rule
/// of the signup form this store backs.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

impl Default for SignupBook {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupBook {
    /// Create a new empty signup book with version 1
    pub fn new() -> Self {
        Self {
            version: 1,
            signups: Vec::new(),
        }
    }

    /// Check whether an email (in any casing) is already signed up
    pub fn contains(&self, email: &str) -> bool {
        let normalized = normalize_email(email);
        self.signups.iter().any(|record| record.email == normalized)
    }

    /// Add a signup. Returns false without modifying the book when the
    /// email is already present; duplicates are not an error.
    pub fn add(&mut self, email: &str, personality_type_id: Option<String>) -> bool {
        let normalized = normalize_email(email);
        if self.contains(&normalized) {
            return false;
        }
        self.signups.push(SignupRecord {
            email: normalized,
            personality_type_id,
            created_at: Utc::now(),
        });
        true
    }

    /// Signups ordered most recent first (the admin listing order)
    pub fn recent_first(&self) -> Vec<&SignupRecord> {
        let mut records: Vec<&SignupRecord> = self.signups.iter().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    /// Render all signups as CSV, most recent first, with a header row
    pub fn to_csv(&self) -> String {
        let mut lines = vec!["email,personality_type_id,created_at".to_string()];
        for record in self.recent_first() {
            lines.push(format!(
                "{},{},{}",
                csv_field(&record.email),
                csv_field(record.personality_type_id.as_deref().unwrap_or("")),
                record.created_at.to_rfc3339(),
            ));
        }
        lines.join("\n")
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
