//! End-to-end assistant sessions over in-memory input and output.

mod mocks;

use birthday_book::error::{MSG_CONTACT_NOT_FOUND, MSG_GIVE_ME_INPUT, MSG_INVALID_FORMAT};
use birthday_book::{run_session, AddressBook, ContactName, Record};
use chrono::NaiveDate;
use mocks::MockBookStore;
use std::io::Cursor;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// Run `script` and return the replies, one per prompt.
fn run(store: &MockBookStore, script: &str) -> Vec<String> {
    let mut output = Vec::new();
    run_session(store, Cursor::new(script.to_string()), &mut output, monday).unwrap();

    let text = String::from_utf8(output).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Welcome to the assistant bot!"));
    text.split("Enter a command: ")
        .skip(1)
        .map(|reply| reply.trim_end_matches('\n').to_string())
        .collect()
}

#[test]
fn test_full_session() {
    let store = MockBookStore::new();
    let replies = run(
        &store,
        "hello\n\
         add Alice 0501234567\n\
         add Bob 0507654321\n\
         add-birthday alice 10.06.1990\n\
         add-birthday BOB 15.06.1985\n\
         phone alice\n\
         show-birthday bob\n\
         change alice 0661112233\n\
         phone ALICE\n\
         birthdays\n\
         all\n\
         exit\n",
    );

    assert_eq!(
        replies,
        [
            "How can I help you?",
            "Contact added.",
            "Contact added.",
            "Birthday added.",
            "Birthday added.",
            "0501234567",
            "15.06.1985",
            "Contact updated.",
            "0661112233",
            "Upcoming birthdays:\nalice: 2024.06.10\nbob: 2024.06.17",
            "Contact name: alice, phones: 0661112233, birthday: 10.06.1990\n\
             Contact name: bob, phones: 0507654321, birthday: 15.06.1985",
            "Good bye!",
        ]
    );

    assert_eq!(store.get_call_count("load"), 1);
    assert_eq!(store.get_call_count("save"), 1);
    assert_eq!(store.stored().len(), 2);
}

#[test]
fn test_error_replies() {
    let store = MockBookStore::new();
    let replies = run(
        &store,
        "add alice\n\
         add alice 123\n\
         add alice 0501234567 extra\n\
         phone bob\n\
         change bob 0501234567\n\
         show-birthday alice\n\
         add-birthday alice 1990-06-10\n\
         add-birthday ghost 10.06.1990\n\
         fly away\n\
         \n\
         close\n",
    );

    assert_eq!(
        replies,
        [
            MSG_GIVE_ME_INPUT,
            MSG_GIVE_ME_INPUT,
            MSG_GIVE_ME_INPUT,
            MSG_CONTACT_NOT_FOUND,
            MSG_CONTACT_NOT_FOUND,
            MSG_CONTACT_NOT_FOUND,
            MSG_CONTACT_NOT_FOUND,
            MSG_CONTACT_NOT_FOUND,
            "Invalid command.",
            "Invalid command.",
            "Good bye!",
        ]
    );
    assert!(store.stored().is_empty());
}

#[test]
fn test_short_or_signed_birthday_years_are_rejected() {
    let store = MockBookStore::new();
    let replies = run(
        &store,
        "add alice 0501234567\n\
         add-birthday alice 10.06.90\n\
         add-birthday alice 10.06.+1990\n\
         add-birthday alice 1.6.1990\n\
         show-birthday alice\n\
         exit\n",
    );

    assert_eq!(
        replies,
        [
            "Contact added.",
            MSG_GIVE_ME_INPUT,
            MSG_GIVE_ME_INPUT,
            MSG_GIVE_ME_INPUT,
            MSG_CONTACT_NOT_FOUND,
            "Good bye!",
        ]
    );
    assert!(store.stored().find("alice").unwrap().birthday().is_none());
}

#[test]
fn test_contact_without_phones_reports_invalid_format() {
    let mut book = AddressBook::new();
    book.add_record(Record::new(ContactName::new("carol").unwrap()));
    let store = MockBookStore::with_book(book);

    let replies = run(&store, "phone carol\nchange carol 0501234567\nexit\n");
    assert_eq!(replies, [MSG_INVALID_FORMAT, MSG_INVALID_FORMAT, "Good bye!"]);
}

#[test]
fn test_session_resumes_saved_book() {
    let store = MockBookStore::new();
    run(&store, "add alice 0501234567\nexit\n");

    let replies = run(&store, "phone alice\nall\nexit\n");
    assert_eq!(
        replies,
        [
            "0501234567",
            "Contact name: alice, phones: 0501234567",
            "Good bye!"
        ]
    );
    assert_eq!(store.get_call_count("load"), 2);
}

#[test]
fn test_end_of_input_still_saves() {
    let store = MockBookStore::new();
    run(&store, "add alice 0501234567\n");

    assert_eq!(store.get_call_count("save"), 1);
    assert!(store.stored().find("alice").is_some());
}

#[test]
fn test_lines_after_exit_are_ignored() {
    let store = MockBookStore::new();
    let replies = run(&store, "exit\nadd alice 0501234567\n");

    assert_eq!(replies, ["Good bye!"]);
    assert!(store.stored().is_empty());
}

#[test]
fn test_save_failure_is_reported() {
    let store = MockBookStore::new();
    store.fail_saves();

    let mut output = Vec::new();
    let result = run_session(&store, Cursor::new("exit\n"), &mut output, monday);
    assert!(result.is_err());
}
