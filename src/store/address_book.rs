//! Address book repository: keyed contacts plus their persistence binding.

use chrono::{Datelike, Duration, Local, NaiveDate};
use indexmap::IndexMap;

use crate::domain::{Contact, FieldSelector};
use crate::store::{FileStore, StoreError};

/// In-memory contact collection backed by a [`FileStore`].
///
/// The book exclusively owns both the map and the backing file. Every
/// mutation saves the whole collection synchronously. Key uniqueness on add
/// is the command layer's responsibility, not the book's.
#[derive(Debug)]
pub struct AddressBook {
    store: FileStore<Contact>,
    data: IndexMap<String, Contact>,
}

impl AddressBook {
    /// Opens the book, loading whatever the backing file holds.
    pub fn open(store: FileStore<Contact>) -> Self {
        let data = store.load();
        Self { store, data }
    }

    /// All records in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Contact> {
        self.data.values()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts a record under `name`. The caller has already checked that no
    /// record with this name exists.
    pub fn add_record(&mut self, name: &str, record: Contact) -> Result<(), StoreError> {
        self.data.insert(name.to_string(), record);
        self.store.save(&self.data)
    }

    /// Unconditionally overwrites the record at `name`.
    pub fn update_record(&mut self, name: &str, record: Contact) -> Result<(), StoreError> {
        self.data.insert(name.to_string(), record);
        self.store.save(&self.data)
    }

    /// Removes the record at `name`. Presence was checked by the caller.
    pub fn delete_record(&mut self, name: &str) -> Result<(), StoreError> {
        self.data.shift_remove(name);
        self.store.save(&self.data)
    }

    /// Exact key lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.data.get(name)
    }

    /// First record whose selected field equals `value`.
    ///
    /// `Name` is the exact key lookup; the other selectors scan linearly
    /// with ties broken by insertion order. `Phone` matches against the
    /// whole phone list; `Email` and `Birthday` compare the stored value
    /// exactly.
    pub fn find(&self, selector: FieldSelector, value: &str) -> Option<&Contact> {
        match selector {
            FieldSelector::Name => self.data.get(value),
            FieldSelector::Phone => self.data.values().find(|record| record.has_phone(value)),
            _ => self
                .data
                .values()
                .find(|record| record.field_value(selector) == Some(value)),
        }
    }

    /// Contacts whose birthday, re-anchored to the current year, falls within
    /// `today..=today + days`.
    pub fn upcoming_birthdays(&self, days: i64) -> Vec<(&Contact, NaiveDate)> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    /// Window check against an explicit `today`, for determinism in tests.
    ///
    /// A birthday earlier this year is excluded even though its next
    /// occurrence may be close: the anchor never rolls over to next year.
    /// Feb 29 birthdays are skipped in non-leap years.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        days: i64,
    ) -> Vec<(&Contact, NaiveDate)> {
        // A window that overflows the calendar is clamped to its end.
        let window_end = Duration::try_days(days)
            .and_then(|delta| today.checked_add_signed(delta))
            .unwrap_or(NaiveDate::MAX);
        self.data
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let parsed = NaiveDate::parse_from_str(birthday, "%d.%m.%Y").ok()?;
                let anchored = parsed.with_year(today.year())?;
                (today <= anchored && anchored <= window_end).then_some((record, anchored))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::{TempDir, tempdir};

    fn open_book() -> (TempDir, AddressBook) {
        let dir = tempdir().unwrap();
        let book = AddressBook::open(FileStore::new(dir.path().join("addressbook.json")));
        (dir, book)
    }

    fn contact(name: &str, phone: &str) -> Contact {
        let mut record = Contact::new(name);
        record.add_phone(phone);
        record
    }

    #[test]
    fn add_then_find_by_name() {
        let (_dir, mut book) = open_book();
        book.add_record("John", contact("John", "+380981171922"))
            .unwrap();
        let found = book.find_by_name("John").unwrap();
        assert!(found.has_phone("+380981171922"));
    }

    #[test]
    fn delete_removes_record() {
        let (_dir, mut book) = open_book();
        book.add_record("John", contact("John", "+380981171922"))
            .unwrap();
        book.delete_record("John").unwrap();
        assert!(book.find_by_name("John").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn find_by_name_selector_is_exact_key_lookup() {
        let (_dir, mut book) = open_book();
        book.add_record("John", contact("John", "+380981171922"))
            .unwrap();
        let found = book.find(FieldSelector::Name, "John").unwrap();
        assert_eq!(found.name(), "John");
        assert!(book.find(FieldSelector::Name, "john").is_none());
    }

    #[test]
    fn find_by_phone_checks_list_membership() {
        let (_dir, mut book) = open_book();
        let mut record = contact("John", "+380981171922");
        record.add_phone("+380987654321");
        book.add_record("John", record).unwrap();

        let found = book.find(FieldSelector::Phone, "+380987654321").unwrap();
        assert_eq!(found.name(), "John");
        assert!(book.find(FieldSelector::Phone, "+380000000000").is_none());
    }

    #[test]
    fn find_by_email_is_exact_match() {
        let (_dir, mut book) = open_book();
        let mut record = contact("John", "+380981171922");
        record.set_email("john@example.com");
        book.add_record("John", record).unwrap();

        assert!(book.find(FieldSelector::Email, "john@example.com").is_some());
        assert!(book.find(FieldSelector::Email, "JOHN@example.com").is_none());
    }

    #[test]
    fn find_ties_break_by_insertion_order() {
        let (_dir, mut book) = open_book();
        let mut first = contact("Anna", "+380981171922");
        first.set_email("shared@example.com");
        let mut second = contact("Bohdan", "+380987654321");
        second.set_email("shared@example.com");
        book.add_record("Anna", first).unwrap();
        book.add_record("Bohdan", second).unwrap();

        let found = book.find(FieldSelector::Email, "shared@example.com").unwrap();
        assert_eq!(found.name(), "Anna");
    }

    #[test]
    fn reopen_reloads_persisted_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addressbook.json");
        {
            let mut book = AddressBook::open(FileStore::new(&path));
            let mut record = contact("John", "+380981171922");
            record.set_birthday("01.01.2000");
            book.add_record("John", record).unwrap();
        }
        let reopened = AddressBook::open(FileStore::new(&path));
        let found = reopened.find_by_name("John").unwrap();
        assert_eq!(found.birthday(), Some("01.01.2000"));
        assert!(found.has_phone("+380981171922"));
    }

    // ===========================================
    // Birthday window
    // ===========================================

    fn with_birthday(name: &str, birthday: &str) -> Contact {
        let mut record = contact(name, "+380981171922");
        record.set_birthday(birthday);
        record
    }

    fn today_fixture() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn birthday_today_is_included() {
        let (_dir, mut book) = open_book();
        book.add_record("John", with_birthday("John", "15.06.1990"))
            .unwrap();
        let upcoming = book.upcoming_birthdays_from(today_fixture(), 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].1, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn birthday_at_window_end_is_included() {
        let (_dir, mut book) = open_book();
        book.add_record("John", with_birthday("John", "22.06.1990"))
            .unwrap();
        assert_eq!(book.upcoming_birthdays_from(today_fixture(), 7).len(), 1);
    }

    #[test]
    fn birthday_eight_days_out_is_excluded() {
        let (_dir, mut book) = open_book();
        book.add_record("John", with_birthday("John", "23.06.1990"))
            .unwrap();
        assert!(book.upcoming_birthdays_from(today_fixture(), 7).is_empty());
    }

    #[test]
    fn birthday_yesterday_is_excluded() {
        let (_dir, mut book) = open_book();
        book.add_record("John", with_birthday("John", "14.06.1990"))
            .unwrap();
        assert!(book.upcoming_birthdays_from(today_fixture(), 7).is_empty());
    }

    #[test]
    fn birthday_next_year_does_not_roll_over() {
        // A January birthday checked in late December stays anchored to the
        // current year, so it is already in the past and excluded.
        let (_dir, mut book) = open_book();
        book.add_record("John", with_birthday("John", "02.01.1990"))
            .unwrap();
        let late_december = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        assert!(book.upcoming_birthdays_from(late_december, 7).is_empty());
    }

    #[test]
    fn feb_29_skipped_in_non_leap_year() {
        let (_dir, mut book) = open_book();
        book.add_record("John", with_birthday("John", "29.02.1992"))
            .unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 2, 25).unwrap();
        assert!(book.upcoming_birthdays_from(today, 7).is_empty());
    }

    #[test]
    fn oversized_window_is_clamped_not_overflowed() {
        let (_dir, mut book) = open_book();
        book.add_record("John", with_birthday("John", "31.12.1990"))
            .unwrap();
        let upcoming = book.upcoming_birthdays_from(today_fixture(), i64::MAX);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].1, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn contacts_without_birthday_are_ignored() {
        let (_dir, mut book) = open_book();
        book.add_record("John", contact("John", "+380981171922"))
            .unwrap();
        assert!(book.upcoming_birthdays_from(today_fixture(), 7).is_empty());
    }
}
