//! Command registry: maps command names to handler functions.

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

use crate::cli::handlers;
use crate::cli::messages;
use crate::store::{AddressBook, FileStore, NotesBook};

/// Backing file name for the address book inside the data directory.
pub const ADDRESSBOOK_FILE: &str = "addressbook.json";
/// Backing file name for the notes book inside the data directory.
pub const NOTESBOOK_FILE: &str = "notesbook.json";

/// The two repositories every handler operates on.
pub struct Books {
    pub contacts: AddressBook,
    pub notes: NotesBook,
}

impl Books {
    /// Opens both books from their default files under `data_dir`.
    pub fn open(data_dir: &Path) -> Self {
        Self {
            contacts: AddressBook::open(FileStore::new(data_dir.join(ADDRESSBOOK_FILE))),
            notes: NotesBook::open(FileStore::new(data_dir.join(NOTESBOOK_FILE))),
        }
    }
}

/// A command implementation.
///
/// `Ok` carries the user-facing outcome, success or not; `Err` is reserved
/// for fatal persistence failures that must stop the process.
pub type Handler = fn(&mut Books, &[String]) -> Result<String>;

/// Static command table, built once at startup and immutable afterwards.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Handler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let commands: [(&'static str, Handler); 19] = [
            ("add_contact", handlers::add_contact),
            ("add_phone", handlers::add_phone),
            ("update_phone", handlers::update_phone),
            ("update_email", handlers::update_email),
            ("update_address", handlers::update_address),
            ("update_birthday", handlers::update_birthday),
            ("show_birthday", handlers::show_birthday),
            ("show_upcoming_birthday", handlers::show_upcoming_birthday),
            ("list_addressbook", handlers::list_addressbook),
            ("delete", handlers::delete_contact),
            ("find_contact", handlers::find_contact),
            ("add_note", handlers::add_note),
            ("list_notesbook", handlers::list_notesbook),
            ("delete_note", handlers::delete_note),
            ("update_note", handlers::update_note),
            ("add_tag", handlers::add_tag),
            ("delete_tag", handlers::delete_tag),
            ("find_note_by_tag", handlers::find_note_by_tag),
            ("find_in_notes_text", handlers::find_in_notes_text),
        ];
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    /// Registered command names, sorted for stable display.
    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Resolves `command` case-insensitively and runs its handler.
    ///
    /// An unknown command is a normal outcome, not an error.
    pub fn execute(&self, books: &mut Books, command: &str, args: &[String]) -> Result<String> {
        match self.commands.get(command.to_lowercase().as_str()) {
            Some(handler) => handler(books, args),
            None => Ok(messages::INVALID_COMMAND.to_string()),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
