//! Persistence: file-backed stores and the two book repositories.

mod address_book;
mod file_store;
mod notes_book;

pub use address_book::AddressBook;
pub use file_store::{FileStore, StoreError};
pub use notes_book::NotesBook;
