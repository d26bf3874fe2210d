//! Command handlers, one function per registered command.

mod contact;
mod note;


pub use contact::{
    add_contact, add_phone, delete_contact, find_contact, list_addressbook, show_birthday,
    show_upcoming_birthday, update_address, update_birthday, update_email, update_phone,
};
pub use note::{
    add_note, add_tag, delete_note, delete_tag, find_in_notes_text, find_note_by_tag,
    list_notesbook, update_note,
};
