//! Note command handlers.

use anyhow::Result;
use chrono::Utc;

use crate::cli::messages;
use crate::cli::registry::Books;
use crate::domain::{Note, validate};

/// `add_note KEY TEXT...`
///
/// Everything after the key is joined into the note text. A duplicate key is
/// rejected; the existing note is never overwritten.
pub fn add_note(books: &mut Books, args: &[String]) -> Result<String> {
    let [key, text_args @ ..] = args else {
        return Ok(messages::wrong_parameters(messages::ADD_NOTE_USAGE));
    };
    let text = text_args.join(" ");
    if !validate::validate_key(key) {
        return Ok(messages::WRONG_KEY.to_string());
    }
    if !validate::validate_text(&text) {
        return Ok(messages::WRONG_TEXT.to_string());
    }
    if books.notes.find_by_key(key).is_some() {
        return Ok(messages::NOTE_KEY_ALREADY_EXISTS.to_string());
    }
    books.notes.add(key, Note::new(key.clone(), text, Utc::now()))?;
    Ok(messages::NOTE_ADDED.to_string())
}

/// `list_notesbook`
pub fn list_notesbook(books: &mut Books, _args: &[String]) -> Result<String> {
    if books.notes.is_empty() {
        return Ok(messages::NOTES_LIST_EMPTY.to_string());
    }
    let rendered: Vec<String> = books.notes.all().map(Note::to_string).collect();
    Ok(rendered.join("\n"))
}

/// `delete_note KEY`
pub fn delete_note(books: &mut Books, args: &[String]) -> Result<String> {
    let [key, ..] = args else {
        return Ok(messages::wrong_parameters(messages::DELETE_NOTE_USAGE));
    };
    if books.notes.find_by_key(key).is_none() {
        return Ok(messages::NOTE_KEY_NOT_EXISTS.to_string());
    }
    books.notes.delete(key)?;
    Ok(messages::NOTE_DELETED.to_string())
}

/// `update_note KEY TEXT...`
///
/// Replaces the text of an existing note; the creation timestamp stays.
pub fn update_note(books: &mut Books, args: &[String]) -> Result<String> {
    let [key, text_args @ ..] = args else {
        return Ok(messages::wrong_parameters(messages::UPDATE_NOTE_USAGE));
    };
    let text = text_args.join(" ");
    if !validate::validate_key(key) {
        return Ok(messages::WRONG_KEY.to_string());
    }
    if !validate::validate_text(&text) {
        return Ok(messages::WRONG_TEXT.to_string());
    }
    let Some(mut note) = books.notes.find_by_key(key).cloned() else {
        return Ok(messages::NOTE_KEY_NOT_EXISTS.to_string());
    };
    note.set_text(text);
    books.notes.update(key, note)?;
    Ok(messages::NOTE_UPDATED.to_string())
}

/// `add_tag KEY TAG`
pub fn add_tag(books: &mut Books, args: &[String]) -> Result<String> {
    let [key, tag, ..] = args else {
        return Ok(messages::wrong_parameters(messages::ADD_TAG_USAGE));
    };
    if !validate::validate_tag(tag) {
        return Ok(messages::WRONG_TAG.to_string());
    }
    let Some(mut note) = books.notes.find_by_key(key).cloned() else {
        return Ok(messages::NOTE_KEY_NOT_EXISTS.to_string());
    };
    if note.has_tag(tag) {
        return Ok(messages::TAG_ALREADY_EXISTS.to_string());
    }
    note.add_tag(tag.clone());
    books.notes.update(key, note)?;
    Ok(messages::TAG_ADDED.to_string())
}

/// `delete_tag KEY TAG`
pub fn delete_tag(books: &mut Books, args: &[String]) -> Result<String> {
    let [key, tag, ..] = args else {
        return Ok(messages::wrong_parameters(messages::DELETE_TAG_USAGE));
    };
    let Some(mut note) = books.notes.find_by_key(key).cloned() else {
        return Ok(messages::NOTE_KEY_NOT_EXISTS.to_string());
    };
    if !note.has_tag(tag) {
        return Ok(messages::TAG_DOES_NOT_EXIST.to_string());
    }
    note.remove_tag(tag);
    books.notes.update(key, note)?;
    Ok(messages::TAG_DELETED.to_string())
}

/// `find_note_by_tag TAG`
pub fn find_note_by_tag(books: &mut Books, args: &[String]) -> Result<String> {
    let [tag, ..] = args else {
        return Ok(messages::wrong_parameters(messages::FIND_NOTE_BY_TAG_USAGE));
    };
    if !validate::validate_tag(tag) {
        return Ok(messages::WRONG_TAG.to_string());
    }
    let found = books.notes.find_by_tag(tag);
    if found.is_empty() {
        return Ok(messages::NOTES_LIST_EMPTY.to_string());
    }
    let rendered: Vec<String> = found.iter().map(|n| n.to_string()).collect();
    Ok(rendered.join("\n"))
}

/// `find_in_notes_text TEXT...`
///
/// Case-insensitive substring search across note texts. The search phrase is
/// the joined remaining arguments.
pub fn find_in_notes_text(books: &mut Books, args: &[String]) -> Result<String> {
    if args.is_empty() {
        return Ok(messages::wrong_parameters(
            messages::FIND_IN_NOTES_TEXT_USAGE,
        ));
    }
    let needle = args.join(" ");
    if !validate::validate_text(&needle) {
        return Ok(messages::WRONG_TEXT.to_string());
    }
    let found = books.notes.find_by_text(&needle);
    if found.is_empty() {
        return Ok(messages::NOTES_LIST_EMPTY.to_string());
    }
    let rendered: Vec<String> = found.iter().map(|n| n.to_string()).collect();
    Ok(rendered.join("\n"))
}
