//! Contact record: a named entry with phones and optional detail fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single address book entry.
///
/// The name is the record's identity within the book and never changes after
/// construction. Phones keep their insertion order; the optional fields hold
/// the raw validated strings as the user entered them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<String>,
}

/// Which contact field a lookup compares against.
///
/// Replaces a lookup keyed by free-form field name with an explicit selector
/// dispatched to dedicated comparison logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSelector {
    Name,
    Phone,
    Email,
    Birthday,
}

impl Contact {
    /// Creates a contact with the given name and no other fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            email: None,
            address: None,
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn birthday(&self) -> Option<&str> {
        self.birthday.as_deref()
    }

    /// Appends a phone number. Duplicates are the caller's concern.
    pub fn add_phone(&mut self, phone: impl Into<String>) {
        self.phones.push(phone.into());
    }

    /// Removes the first occurrence of `phone`, if present.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p == phone) {
            self.phones.remove(pos);
        }
    }

    pub fn has_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p == phone)
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = Some(address.into());
    }

    pub fn set_birthday(&mut self, birthday: impl Into<String>) {
        self.birthday = Some(birthday.into());
    }

    /// Returns the value compared against for the given selector.
    ///
    /// `Name` and `Phone` are special-cased in
    /// [`crate::store::AddressBook::find`]: name is the map key and phone
    /// matches against the whole list, not a single value.
    pub fn field_value(&self, selector: FieldSelector) -> Option<&str> {
        match selector {
            FieldSelector::Name => Some(self.name()),
            FieldSelector::Phone => self.phones.first().map(String::as_str),
            FieldSelector::Email => self.email(),
            FieldSelector::Birthday => self.birthday(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}", self.name)?;
        for phone in &self.phones {
            write!(f, "\nPhone: {phone}")?;
        }
        if let Some(email) = &self.email {
            write!(f, "\nEmail: {email}")?;
        }
        if let Some(address) = &self.address {
            write!(f, "\nAddress: {address}")?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, "\nBirthday: {birthday}")?;
        }
        Ok(())
    }
}
