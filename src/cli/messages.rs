//! Fixed user-facing strings, kept in one place.

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const ENTER_A_COMMAND: &str = "Enter a command: ";
pub const GOOD_BYE: &str = "Good bye!";
pub const NO_COMMAND_ENTERED: &str = "No command entered. Type 'help' to view the list of available commands";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const WRONG_PARAMETERS: &str = "Wrong parameters";

// Usage lines, appended to WRONG_PARAMETERS when a handler gets too few args.
pub const ADD_CONTACT_USAGE: &str = "Usage: add_contact [NAME] [PHONE] [EMAIL*] [ADDRESS*] [BIRTHDAY*]";
pub const ADD_PHONE_USAGE: &str = "Usage: add_phone [NAME] [PHONE]";
pub const UPDATE_PHONE_USAGE: &str = "Usage: update_phone [NAME] [OLD_PHONE] [NEW_PHONE]";
pub const UPDATE_EMAIL_USAGE: &str = "Usage: update_email [NAME] [EMAIL]";
pub const UPDATE_ADDRESS_USAGE: &str = "Usage: update_address [NAME] [ADDRESS]";
pub const UPDATE_BIRTHDAY_USAGE: &str = "Usage: update_birthday [NAME] [BIRTHDAY]";
pub const SHOW_BIRTHDAY_USAGE: &str = "Usage: show_birthday [NAME]";
pub const SHOW_UPCOMING_BIRTHDAY_USAGE: &str = "Usage: show_upcoming_birthday [DAYS]";
pub const DELETE_USAGE: &str = "Usage: delete [NAME]";
pub const FIND_CONTACT_USAGE: &str = "Usage: find_contact [NAME or PHONE or EMAIL or BIRTHDAY]";
pub const ADD_NOTE_USAGE: &str = "Usage: add_note [KEY] [TEXT]";
pub const DELETE_NOTE_USAGE: &str = "Usage: delete_note [KEY]";
pub const UPDATE_NOTE_USAGE: &str = "Usage: update_note [KEY] [TEXT]";
pub const ADD_TAG_USAGE: &str = "Usage: add_tag [KEY] [TAG]";
pub const DELETE_TAG_USAGE: &str = "Usage: delete_tag [KEY] [TAG]";
pub const FIND_NOTE_BY_TAG_USAGE: &str = "Usage: find_note_by_tag [TAG]";
pub const FIND_IN_NOTES_TEXT_USAGE: &str = "Usage: find_in_notes_text [TEXT]";

// Validation failures.
pub const WRONG_PHONE_NUMBER: &str = "Wrong phone number. Must be 12 numbers starting with 38";
pub const WRONG_ADDRESS: &str = "Wrong address. Only allowed letters, numbers, comas and spaces";
pub const WRONG_NAME_VALUE: &str = "Wrong name value. Should contain only letters and hyphens.";
pub const EMAIL_NOT_VALID: &str = "Invalid email format";
pub const BIRTHDAY_NOT_VALID: &str = "Invalid date format. Use DD.MM.YYYY";
pub const WRONG_KEY: &str = "Wrong key for note. Should be an alphanumeric value";
pub const WRONG_TEXT: &str = "You can't add empty note";
pub const WRONG_TAG: &str = "Wrong tag for note. Should be an alphanumeric value";

// Contact outcomes.
pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const CONTACT_DELETED: &str = "Contact deleted.";
pub const CONTACT_ALREADY_EXISTS: &str = "Contact already exists";
pub const CONTACT_DOES_NOT_EXIST: &str = "Contact does not exist";
pub const CONTACT_LIST_EMPTY: &str = "Contact list is empty";
pub const PHONE_ADDED: &str = "Phone added.";
pub const GIVE_NAME_WITH_OLD_AND_NEW_PHONES: &str = "Give me name with old and new phones please.";
pub const BIRTHDAY_NOT_SET: &str = "Birthday not set.";
pub const UPCOMING_BIRTHDAY_MIDDLE_PART: &str = "has an upcoming birthday on";
pub const NO_UPCOMING_BIRTHDAY: &str = "You have no contacts with upcoming birthday";

// Note outcomes.
pub const NOTE_ADDED: &str = "Note is successfully added";
pub const NOTE_UPDATED: &str = "Note is successfully updated";
pub const NOTE_DELETED: &str = "Note is successfully deleted";
pub const NOTE_KEY_ALREADY_EXISTS: &str =
    "Note with this key already exists. Please provide unique key";
pub const NOTE_KEY_NOT_EXISTS: &str =
    "Note with this key does not exist. Please provide correct key";
pub const NOTES_LIST_EMPTY: &str = "Notes list is empty";
pub const TAG_ADDED: &str = "Tag added";
pub const TAG_DELETED: &str = "Tag deleted";
pub const TAG_ALREADY_EXISTS: &str = "This tag already exists at this note";
pub const TAG_DOES_NOT_EXIST: &str = "This tag does not exist at this note";

/// Formats the wrong-parameters outcome for a command's usage line.
pub fn wrong_parameters(usage: &str) -> String {
    format!("{WRONG_PARAMETERS}... {usage}")
}
