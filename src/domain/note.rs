//! Note: a keyed text entry with tags and a creation timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single notes book entry.
///
/// The key is the note's identity and the creation timestamp is set once at
/// construction. Tags keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    key: String,
    text: String,
    created: DateTime<Utc>,
    #[serde(default)]
    tags: Vec<String>,
}

impl Note {
    /// Creates a note with the given key and text, stamped with `created`.
    pub fn new(key: impl Into<String>, text: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            created,
            tags: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replaces the note text. The creation timestamp is untouched.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Appends a tag. Duplicate checking is the caller's concern.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Removes the tag if present; no-op otherwise.
    pub fn remove_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key: {}  Text: {}  Created: {}",
            self.key,
            self.text,
            self.created.format("%Y-%m-%d %H:%M:%S")
        )?;
        if !self.tags.is_empty() {
            write!(f, "\nTags: {}", self.tags.join(","))?;
        }
        Ok(())
    }
}
