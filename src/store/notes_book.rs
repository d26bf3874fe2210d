//! Notes book repository: keyed notes plus their persistence binding.

use indexmap::IndexMap;

use crate::domain::Note;
use crate::store::{FileStore, StoreError};

/// In-memory note collection backed by a [`FileStore`].
///
/// Mirrors [`crate::store::AddressBook`]: the book owns its map and backing
/// file, every mutation saves synchronously, and key uniqueness on add is
/// enforced by the command layer.
#[derive(Debug)]
pub struct NotesBook {
    store: FileStore<Note>,
    data: IndexMap<String, Note>,
}

impl NotesBook {
    /// Opens the book, loading whatever the backing file holds.
    pub fn open(store: FileStore<Note>) -> Self {
        let data = store.load();
        Self { store, data }
    }

    /// All notes in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Note> {
        self.data.values()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts a note under `key`. The caller has already checked uniqueness.
    pub fn add(&mut self, key: &str, note: Note) -> Result<(), StoreError> {
        self.data.insert(key.to_string(), note);
        self.store.save(&self.data)
    }

    /// Unconditionally overwrites the note at `key`.
    pub fn update(&mut self, key: &str, note: Note) -> Result<(), StoreError> {
        self.data.insert(key.to_string(), note);
        self.store.save(&self.data)
    }

    /// Removes the note at `key`. Presence was checked by the caller.
    pub fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.data.shift_remove(key);
        self.store.save(&self.data)
    }

    /// Exact key lookup.
    pub fn find_by_key(&self, key: &str) -> Option<&Note> {
        self.data.get(key)
    }

    /// All notes carrying `tag`, in insertion order.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Note> {
        self.data.values().filter(|n| n.has_tag(tag)).collect()
    }

    /// All notes whose text contains `needle`, case-insensitively.
    pub fn find_by_text(&self, needle: &str) -> Vec<&Note> {
        let needle = needle.to_lowercase();
        self.data
            .values()
            .filter(|n| n.text().to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use tempfile::{TempDir, tempdir};

    fn open_book() -> (TempDir, NotesBook) {
        let dir = tempdir().unwrap();
        let book = NotesBook::open(FileStore::new(dir.path().join("notesbook.json")));
        (dir, book)
    }

    fn note(key: &str, text: &str) -> Note {
        Note::new(key, text, Utc::now())
    }

    #[test]
    fn add_then_find_by_key() {
        let (_dir, mut book) = open_book();
        book.add("groceries", note("groceries", "buy milk")).unwrap();
        assert_eq!(book.find_by_key("groceries").unwrap().text(), "buy milk");
    }

    #[test]
    fn delete_removes_note() {
        let (_dir, mut book) = open_book();
        book.add("groceries", note("groceries", "buy milk")).unwrap();
        book.delete("groceries").unwrap();
        assert!(book.find_by_key("groceries").is_none());
    }

    #[test]
    fn find_by_tag_returns_all_matches_in_order() {
        let (_dir, mut book) = open_book();
        let mut first = note("a", "first");
        first.add_tag("todo");
        let second = note("b", "second");
        let mut third = note("c", "third");
        third.add_tag("todo");
        book.add("a", first).unwrap();
        book.add("b", second).unwrap();
        book.add("c", third).unwrap();

        let found = book.find_by_tag("todo");
        let keys: Vec<&str> = found.iter().map(|n| n.key()).collect();
        assert_eq!(keys, ["a", "c"]);
    }

    #[test]
    fn find_by_text_is_case_insensitive_substring() {
        let (_dir, mut book) = open_book();
        book.add("a", note("a", "Call the Dentist tomorrow")).unwrap();
        book.add("b", note("b", "unrelated")).unwrap();

        let found = book.find_by_text("dentist");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key(), "a");
        assert!(book.find_by_text("plumber").is_empty());
    }

    #[test]
    fn reopen_reloads_notes_with_tags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notesbook.json");
        {
            let mut book = NotesBook::open(FileStore::new(&path));
            let mut n = note("groceries", "buy milk");
            n.add_tag("food");
            n.add_tag("urgent");
            book.add("groceries", n).unwrap();
        }
        let reopened = NotesBook::open(FileStore::new(&path));
        let n = reopened.find_by_key("groceries").unwrap();
        assert_eq!(n.tags(), ["food", "urgent"]);
    }
}
