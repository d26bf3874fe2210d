//! End-to-end tests driving the binary's read-eval loop over stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn porada(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("porada").expect("binary should build");
    cmd.arg("--dir").arg(dir.path());
    cmd
}

#[test]
fn session_greets_and_says_goodbye_on_exit() {
    let dir = TempDir::new().unwrap();
    porada(&dir)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn close_also_ends_the_session() {
    let dir = TempDir::new().unwrap();
    porada(&dir)
        .write_stdin("close\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn eof_ends_the_session_cleanly() {
    let dir = TempDir::new().unwrap();
    porada(&dir).write_stdin("").assert().success();
}

#[test]
fn empty_line_prints_hint() {
    let dir = TempDir::new().unwrap();
    porada(&dir)
        .write_stdin("\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No command entered"));
}

#[test]
fn unknown_command_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    porada(&dir)
        .write_stdin("frobnicate\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command."));
}

#[test]
fn empty_addressbook_listing() {
    let dir = TempDir::new().unwrap();
    porada(&dir)
        .write_stdin("list_addressbook\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact list is empty"));
}

#[test]
fn add_contact_then_listing_contains_it() {
    let dir = TempDir::new().unwrap();
    porada(&dir)
        .write_stdin("add_contact John +380981171922\nlist_addressbook\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("Name: John"))
        .stdout(predicate::str::contains("Phone: +380981171922"));
}

#[test]
fn contacts_persist_across_sessions() {
    let dir = TempDir::new().unwrap();
    porada(&dir)
        .write_stdin("add_contact John +380981171922 john@example.com\nexit\n")
        .assert()
        .success();

    porada(&dir)
        .write_stdin("find_contact John\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone: +380981171922"))
        .stdout(predicate::str::contains("Email: john@example.com"));
}

#[test]
fn notes_persist_with_tags_across_sessions() {
    let dir = TempDir::new().unwrap();
    porada(&dir)
        .write_stdin("add_note groceries buy milk\nadd_tag groceries food\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note is successfully added"))
        .stdout(predicate::str::contains("Tag added"));

    porada(&dir)
        .write_stdin("find_note_by_tag food\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Key: groceries"))
        .stdout(predicate::str::contains("Tags: food"));
}

#[test]
fn note_text_search_spans_multiple_words() {
    let dir = TempDir::new().unwrap();
    porada(&dir)
        .write_stdin("add_note a Call the Dentist\nfind_in_notes_text the dentist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Key: a"));
}

#[test]
fn huge_birthday_window_does_not_end_the_session() {
    let dir = TempDir::new().unwrap();
    porada(&dir)
        .write_stdin("show_upcoming_birthday 100000000000000\nlist_addressbook\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: show_upcoming_birthday"))
        .stdout(predicate::str::contains("Contact list is empty"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn help_lists_registered_commands() {
    let dir = TempDir::new().unwrap();
    porada(&dir)
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("add_contact"))
        .stdout(predicate::str::contains("find_in_notes_text"));
}
