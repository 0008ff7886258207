use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

#[test]
fn edit_contact() -> Result<(), Box<dyn std::error::Error>> {
    let storage = TempDir::new()?;
    let storage_env = ("CONTACTS_PATH", storage.path().join("contacts.json"));

    for (name, email, phone) in [
        ("Alice", "alice@example.com", "081234567890"),
        ("Bob", "bob@example.com", "081234567891"),
    ] {
        Command::cargo_bin(env!("CARGO_PKG_NAME"))?
            .env(&storage_env.0, &storage_env.1)
            .args(["add", "--name", name, "--email", email, "--phone", phone])
            .assert()
            .success();
    }

    // Edit the contact (change phone, keep name)
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env(&storage_env.0, &storage_env.1)
        .arg("edit")
        .arg("--name")
        .arg("Alice")
        .arg("--new-phone")
        .arg("+6289512345678")
        .assert()
        .success()
        .stdout(contains("Contact updated successfully"));

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env(&storage_env.0, &storage_env.1)
        .args(["show", "--name", "Alice"])
        .assert()
        .success()
        .stdout(contains("Phone: +6289512345678"));

    // Renaming onto another contact is refused
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env(&storage_env.0, &storage_env.1)
        .args(["edit", "--name", "Alice", "--new-name", "Bob"])
        .assert()
        .failure()
        .stderr(contains("Name Already Registered!"));

    // Rename
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env(&storage_env.0, &storage_env.1)
        .args(["edit", "--name", "Alice", "--new-name", "Alicia"])
        .assert()
        .success();

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env(&storage_env.0, &storage_env.1)
        .args(["show", "--name", "Alicia"])
        .assert()
        .success()
        .stdout(contains("Email: alice@example.com"));

    // Editing a missing contact
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env(&storage_env.0, &storage_env.1)
        .args(["edit", "--name", "Alice", "--new-email", "a@b.com"])
        .assert()
        .failure()
        .stderr(contains("Contact 'Alice' not found"));

    Ok(())
}
