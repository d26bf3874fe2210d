//! Core types: Contact, Note, field selectors, and input validation.

mod contact;
mod note;
pub mod validate;

pub use contact::{Contact, FieldSelector};
pub use note::Note;
