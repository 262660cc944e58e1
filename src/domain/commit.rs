use chrono::{DateTime, FixedOffset, NaiveDate};

/// A commit as read from the commit source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full commit id, unique within the branch
    pub id: String,
    /// Authoring timestamp in the author's own UTC offset
    pub authored: DateTime<FixedOffset>,
    /// Commit message with trailing line breaks removed
    pub message: String,
}

impl Commit {
    /// Create a commit, trimming trailing `\r` and `\n` from the message
    pub fn new(id: impl Into<String>, authored: DateTime<FixedOffset>, message: &str) -> Self {
        Commit {
            id: id.into(),
            authored,
            message: message.trim_end_matches(['\r', '\n']).to_string(),
        }
    }

    /// Calendar date of the authoring timestamp, in the author's offset
    pub fn date(&self) -> NaiveDate {
        self.authored.date_naive()
    }
}
