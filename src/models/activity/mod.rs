//! Academic activity model.
//!
//! An activity is a study session, exam, assignment or reading scheduled by a
//! user. [`ActivityDraft`] is what the dialog hands to the repository;
//! [`Activity`] is a row read back from the `academic` table.

use chrono::{DateTime, Utc};

/// Closed set of activity categories.
///
/// The stored key (see [`ActivityTag::key`]) is what lands in the `tags`
/// column, so it must never change for an existing variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivityTag {
    /// Study session
    #[default]
    Study,
    /// Exam or assessment
    Exam,
    /// Assignment or hand-in
    Assignment,
    /// Reading
    Reading,
}

impl ActivityTag {
    /// All tags in the order they are offered to the user.
    pub const ALL: [ActivityTag; 4] = [
        ActivityTag::Study,
        ActivityTag::Exam,
        ActivityTag::Assignment,
        ActivityTag::Reading,
    ];

    /// Key persisted in the database.
    pub fn key(&self) -> &'static str {
        match self {
            ActivityTag::Study => "estudo",
            ActivityTag::Exam => "prova",
            ActivityTag::Assignment => "trabalho",
            ActivityTag::Reading => "leitura",
        }
    }

    /// Parse a persisted key back into a tag.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityTag::Study => "Study session",
            ActivityTag::Exam => "Exam / Assessment",
            ActivityTag::Assignment => "Assignment / Hand-in",
            ActivityTag::Reading => "Reading",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ActivityTag::Study => "📚",
            ActivityTag::Exam => "📝",
            ActivityTag::Assignment => "📊",
            ActivityTag::Reading => "📖",
        }
    }

    /// Get the display string (emoji + label) for UI.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.emoji(), self.label())
    }
}

impl std::fmt::Display for ActivityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A not-yet-persisted activity, as captured by the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDraft {
    pub name: String,
    /// `None` is stored as SQL NULL
    pub details: Option<String>,
    pub tag: ActivityTag,
    pub occurs_at: DateTime<Utc>,
}

impl ActivityDraft {
    /// Build a draft from raw form values.
    ///
    /// Empty details collapse to `None` so they persist as NULL rather
    /// than an empty string.
    pub fn new(
        name: impl Into<String>,
        details: &str,
        tag: ActivityTag,
        occurs_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            details: if details.is_empty() {
                None
            } else {
                Some(details.to_string())
            },
            tag,
            occurs_at,
        }
    }
}

/// A persisted activity row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub details: Option<String>,
    pub tag: ActivityTag,
    pub occurs_at: DateTime<Utc>,
}
