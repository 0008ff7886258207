use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn contact_book(storage: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("contact-book").unwrap();
    cmd.env("CONTACTS_PATH", storage.path().join("contacts.json"));
    cmd
}

#[test]
fn add_contact() {
    let storage = TempDir::new().unwrap();

    // Add a contact
    contact_book(&storage)
        .args([
            "add",
            "--name",
            "Alice",
            "--email",
            "alice@example.com",
            "--phone",
            "081234567890",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully"));

    // Confirm newly added contact exist
    contact_book(&storage)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice").and(predicate::str::contains("alice@example.com")));

    // Attempt to Add duplicate contacts
    contact_book(&storage)
        .args([
            "add",
            "--name",
            "Alice",
            "--email",
            "other@example.com",
            "--phone",
            "+6281234567891",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name Already Registered!"));

    let stored = fs::read_to_string(storage.path().join("contacts.json")).unwrap();
    assert!(!stored.contains("other@example.com"));
}

#[test]
fn invalid_inputs() {
    let storage = TempDir::new().unwrap();

    // INVALID COMMAND
    contact_book(&storage)
        .args(["and", "--name", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand 'and'"));

    // INVALID EMAIL
    contact_book(&storage)
        .args([
            "add",
            "--name",
            "Alice",
            "--email",
            "foo@bar",
            "--phone",
            "081234567890",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Email Format!"));

    // INVALID PHONE NUMBER
    contact_book(&storage)
        .args([
            "add",
            "--name",
            "Alice",
            "--email",
            "alice@example.com",
            "--phone",
            "+2348031234567",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Phone Number (id-ID)!"));

    // BLANK NAME
    contact_book(&storage)
        .args([
            "add",
            "--name",
            "  ",
            "--email",
            "alice@example.com",
            "--phone",
            "081234567890",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name is required!"));

    contact_book(&storage)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"));
}

#[test]
fn in_memory_run_writes_nothing() {
    let storage = TempDir::new().unwrap();

    contact_book(&storage)
        .args([
            "--in-memory",
            "add",
            "--name",
            "Alice",
            "--email",
            "alice@example.com",
            "--phone",
            "081234567890",
        ])
        .assert()
        .success();

    assert!(!storage.path().join("contacts.json").exists());
}
