//! Input validation predicates for contact and note fields.
//!
//! Each predicate is a pure pass/fail check against a fixed pattern. No
//! normalization happens here; callers store the raw string as entered.

use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?38[ _-]?\(?\d{3}\)?[ _-]?\d{3}[ _-]?\d{2}[ _-]?\d{2}$")
        .expect("failed to compile phone regex")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$")
        .expect("failed to compile email regex")
});

static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[0-2])\.(19|20)\d{2}$")
        .expect("failed to compile birthday regex")
});

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z-]+$").expect("failed to compile name regex"));

static KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("failed to compile key regex"));

/// Ukrainian-style phone number: optional `+`, a `38` prefix, then ten
/// digits, with optional ` `/`_`/`-` separators between the groups of a
/// `(XXX) XXX XX XX` layout.
pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Permissive `local@domain.tld` shape.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// `DD.MM.YYYY`, day 01-31, month 01-12, year starting with 19 or 20.
pub fn validate_birthday(birthday: &str) -> bool {
    BIRTHDAY_RE.is_match(birthday)
}

/// Letters and hyphens only, at least one character.
pub fn validate_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Letters, digits, commas, and spaces, with at least one letter and one
/// digit present.
pub fn validate_address(address: &str) -> bool {
    let charset_ok = address
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ',' || c == ' ');
    charset_ok
        && !address.is_empty()
        && address.chars().any(|c| c.is_ascii_alphabetic())
        && address.chars().any(|c| c.is_ascii_digit())
}

/// Alphanumeric, underscore, or hyphen, at least one character.
pub fn validate_key(key: &str) -> bool {
    KEY_RE.is_match(key)
}

/// Same charset as note keys.
pub fn validate_tag(tag: &str) -> bool {
    KEY_RE.is_match(tag)
}

/// Non-empty string.
pub fn validate_text(text: &str) -> bool {
    !text.is_empty()
}
