//! Contact command handlers.

use anyhow::Result;

use crate::cli::messages;
use crate::cli::registry::Books;
use crate::domain::{Contact, FieldSelector, validate};

/// `add_contact NAME PHONE [EMAIL] [ADDRESS] [BIRTHDAY]`
///
/// The name+phone record is committed first; each valid optional field then
/// triggers its own persisted update. An optional field that fails
/// validation is skipped silently rather than rejecting the whole command —
/// questionable leniency, but the documented behavior.
pub fn add_contact(books: &mut Books, args: &[String]) -> Result<String> {
    let [name, phone, rest @ ..] = args else {
        return Ok(messages::wrong_parameters(messages::ADD_CONTACT_USAGE));
    };
    if !validate::validate_name(name) {
        return Ok(messages::WRONG_NAME_VALUE.to_string());
    }
    if !validate::validate_phone(phone) {
        return Ok(messages::WRONG_PHONE_NUMBER.to_string());
    }
    if books.contacts.find_by_name(name).is_some() {
        return Ok(messages::CONTACT_ALREADY_EXISTS.to_string());
    }

    let mut record = Contact::new(name.clone());
    record.add_phone(phone.clone());
    books.contacts.add_record(name, record.clone())?;

    if let Some(email) = rest.first() {
        if validate::validate_email(email) {
            record.set_email(email.clone());
            books.contacts.update_record(name, record.clone())?;
        }
    }
    if let Some(address) = rest.get(1) {
        if validate::validate_address(address) {
            record.set_address(address.clone());
            books.contacts.update_record(name, record.clone())?;
        }
    }
    if let Some(birthday) = rest.get(2) {
        if validate::validate_birthday(birthday) {
            record.set_birthday(birthday.clone());
            books.contacts.update_record(name, record)?;
        }
    }

    Ok(messages::CONTACT_ADDED.to_string())
}

/// `add_phone NAME PHONE`
pub fn add_phone(books: &mut Books, args: &[String]) -> Result<String> {
    let [name, phone, ..] = args else {
        return Ok(messages::wrong_parameters(messages::ADD_PHONE_USAGE));
    };
    if !validate::validate_phone(phone) {
        return Ok(messages::WRONG_PHONE_NUMBER.to_string());
    }
    let Some(mut record) = books.contacts.find_by_name(name).cloned() else {
        return Ok(messages::CONTACT_DOES_NOT_EXIST.to_string());
    };
    record.add_phone(phone.clone());
    books.contacts.update_record(name, record)?;
    Ok(messages::PHONE_ADDED.to_string())
}

/// `update_phone NAME OLD_PHONE NEW_PHONE`
pub fn update_phone(books: &mut Books, args: &[String]) -> Result<String> {
    let [name, old_phone, new_phone, ..] = args else {
        return Ok(messages::wrong_parameters(messages::UPDATE_PHONE_USAGE));
    };
    if !validate::validate_phone(old_phone) || !validate::validate_phone(new_phone) {
        return Ok(messages::WRONG_PHONE_NUMBER.to_string());
    }
    let Some(mut record) = books.contacts.find_by_name(name).cloned() else {
        return Ok(messages::CONTACT_DOES_NOT_EXIST.to_string());
    };
    if !record.has_phone(old_phone) {
        return Ok(messages::GIVE_NAME_WITH_OLD_AND_NEW_PHONES.to_string());
    }
    record.remove_phone(old_phone);
    record.add_phone(new_phone.clone());
    books.contacts.update_record(name, record)?;
    Ok(messages::CONTACT_UPDATED.to_string())
}

/// `update_email NAME EMAIL`
pub fn update_email(books: &mut Books, args: &[String]) -> Result<String> {
    let [name, email, ..] = args else {
        return Ok(messages::wrong_parameters(messages::UPDATE_EMAIL_USAGE));
    };
    if !validate::validate_email(email) {
        return Ok(messages::EMAIL_NOT_VALID.to_string());
    }
    let Some(mut record) = books.contacts.find_by_name(name).cloned() else {
        return Ok(messages::CONTACT_DOES_NOT_EXIST.to_string());
    };
    record.set_email(email.clone());
    books.contacts.update_record(name, record)?;
    Ok(messages::CONTACT_UPDATED.to_string())
}

/// `update_address NAME ADDRESS`
pub fn update_address(books: &mut Books, args: &[String]) -> Result<String> {
    let [name, address, ..] = args else {
        return Ok(messages::wrong_parameters(messages::UPDATE_ADDRESS_USAGE));
    };
    if !validate::validate_address(address) {
        return Ok(messages::WRONG_ADDRESS.to_string());
    }
    let Some(mut record) = books.contacts.find_by_name(name).cloned() else {
        return Ok(messages::CONTACT_DOES_NOT_EXIST.to_string());
    };
    record.set_address(address.clone());
    books.contacts.update_record(name, record)?;
    Ok(messages::CONTACT_UPDATED.to_string())
}

/// `update_birthday NAME BIRTHDAY`
pub fn update_birthday(books: &mut Books, args: &[String]) -> Result<String> {
    let [name, date, ..] = args else {
        return Ok(messages::wrong_parameters(messages::UPDATE_BIRTHDAY_USAGE));
    };
    if !validate::validate_birthday(date) {
        return Ok(messages::BIRTHDAY_NOT_VALID.to_string());
    }
    let Some(mut record) = books.contacts.find_by_name(name).cloned() else {
        return Ok(messages::CONTACT_DOES_NOT_EXIST.to_string());
    };
    record.set_birthday(date.clone());
    books.contacts.update_record(name, record)?;
    Ok(messages::CONTACT_UPDATED.to_string())
}

/// `show_birthday NAME`
pub fn show_birthday(books: &mut Books, args: &[String]) -> Result<String> {
    let [name, ..] = args else {
        return Ok(messages::wrong_parameters(messages::SHOW_BIRTHDAY_USAGE));
    };
    match books.contacts.find_by_name(name).and_then(Contact::birthday) {
        Some(birthday) => Ok(birthday.to_string()),
        None => Ok(messages::BIRTHDAY_NOT_SET.to_string()),
    }
}

/// Longest accepted birthday window. Anchored birthdays never leave the
/// current year, so a window longer than a year cannot match anything more.
const MAX_UPCOMING_WINDOW_DAYS: i64 = 366;

/// `show_upcoming_birthday [DAYS]` (default 7)
pub fn show_upcoming_birthday(books: &mut Books, args: &[String]) -> Result<String> {
    let days = match args.first() {
        Some(raw) => match raw.parse::<i64>() {
            Ok(days) if (0..=MAX_UPCOMING_WINDOW_DAYS).contains(&days) => days,
            _ => {
                return Ok(messages::wrong_parameters(
                    messages::SHOW_UPCOMING_BIRTHDAY_USAGE,
                ));
            }
        },
        None => 7,
    };

    let upcoming = books.contacts.upcoming_birthdays(days);
    if upcoming.is_empty() {
        return Ok(messages::NO_UPCOMING_BIRTHDAY.to_string());
    }
    let lines: Vec<String> = upcoming
        .iter()
        .map(|(record, date)| {
            format!(
                "{} {} {}.",
                record.name(),
                messages::UPCOMING_BIRTHDAY_MIDDLE_PART,
                date.format("%d.%m.%Y")
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

/// `list_addressbook`
pub fn list_addressbook(books: &mut Books, _args: &[String]) -> Result<String> {
    if books.contacts.is_empty() {
        return Ok(messages::CONTACT_LIST_EMPTY.to_string());
    }
    let rendered: Vec<String> = books.contacts.all().map(Contact::to_string).collect();
    Ok(rendered.join("\n"))
}

/// `delete NAME`
pub fn delete_contact(books: &mut Books, args: &[String]) -> Result<String> {
    let [name, ..] = args else {
        return Ok(messages::wrong_parameters(messages::DELETE_USAGE));
    };
    if books.contacts.find_by_name(name).is_none() {
        return Ok(messages::CONTACT_DOES_NOT_EXIST.to_string());
    }
    books.contacts.delete_record(name)?;
    Ok(messages::CONTACT_DELETED.to_string())
}

/// `find_contact VALUE`
///
/// Tries the name selector first, then the field selector picked by
/// whichever validator the value passes: phone, email, or birthday.
pub fn find_contact(books: &mut Books, args: &[String]) -> Result<String> {
    let [value, ..] = args else {
        return Ok(messages::wrong_parameters(messages::FIND_CONTACT_USAGE));
    };

    let fallback = if validate::validate_phone(value) {
        Some(FieldSelector::Phone)
    } else if validate::validate_email(value) {
        Some(FieldSelector::Email)
    } else if validate::validate_birthday(value) {
        Some(FieldSelector::Birthday)
    } else {
        None
    };

    let found = books
        .contacts
        .find(FieldSelector::Name, value)
        .or_else(|| fallback.and_then(|selector| books.contacts.find(selector, value)));

    match found {
        Some(record) => Ok(record.to_string()),
        None => Ok(messages::CONTACT_DOES_NOT_EXIST.to_string()),
    }
}
