//! Tests for saving and loading the address book as a JSON file.

use contact_book::book::AddressBook;
use contact_book::error::StorageError;
use contact_book::models::Record;
use contact_book::repositories::{load_or_default, AddressBookRepository, JsonFileRepository};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn sample_book() -> AddressBook {
    let mut john = Record::new("john").unwrap();
    john.add_phone("1111111111").unwrap();
    john.add_phone("2222222222").unwrap();
    john.add_birthday("15.03.1990").unwrap();

    let mut anna = Record::new("Anna Maria").unwrap();
    anna.add_phone("3333333333").unwrap();

    [john, anna].into_iter().collect()
}

fn repo_in(dir: &TempDir) -> JsonFileRepository {
    JsonFileRepository::new(dir.path().join("addressbook.json"))
}

fn backup_of(path: &Path) -> std::path::PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".backup");
    name.into()
}

#[test]
fn test_save_then_load_restores_book() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    let book = sample_book();

    repo.save(&book).unwrap();
    let loaded = repo.load().unwrap();

    assert_eq!(loaded, book);
    let john = loaded.find("john").unwrap();
    assert_eq!(john.birthday().unwrap().to_string(), "15.03.1990");
}

#[test]
fn test_saved_file_is_versioned_json() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    repo.save(&sample_book()).unwrap();

    let content = fs::read_to_string(repo.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["version"], "1.0");
    assert_eq!(value["records"].as_array().unwrap().len(), 2);
}

#[test]
fn test_missing_file_is_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("nested/deeper/book.json"));

    repo.save(&sample_book()).unwrap();
    assert_eq!(repo.load().unwrap().len(), 2);
}

#[test]
fn test_second_save_keeps_backup() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);

    let first = sample_book();
    repo.save(&first).unwrap();

    let mut second = first.clone();
    second.delete("john").unwrap();
    repo.save(&second).unwrap();

    let backup = JsonFileRepository::new(backup_of(repo.path()));
    assert_eq!(backup.load().unwrap(), first);
    assert_eq!(repo.load().unwrap(), second);
}

#[test]
fn test_corrupted_file_recovers_from_backup() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    let book = sample_book();

    repo.save(&book).unwrap();
    repo.save(&book).unwrap();
    fs::write(repo.path(), "{ not json").unwrap();

    assert_eq!(repo.load().unwrap(), book);
    // The data file itself was restored
    let content = fs::read_to_string(repo.path()).unwrap();
    assert!(content.contains("\"version\""));
}

#[test]
fn test_corrupted_file_without_backup_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    fs::write(repo.path(), "garbage").unwrap();

    match repo.load() {
        Err(StorageError::Corrupted { .. }) => {}
        other => panic!("Expected Corrupted error, got: {:?}", other),
    }
    assert!(load_or_default(&repo).is_empty());
}

#[test]
fn test_invalid_field_in_file_counts_as_corruption() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    fs::write(
        repo.path(),
        r#"{"version":"1.0","records":[{"name":"john","phones":["123"]}]}"#,
    )
    .unwrap();

    assert!(matches!(repo.load(), Err(StorageError::Corrupted { .. })));
}

#[test]
fn test_other_version_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    fs::write(
        repo.path(),
        r#"{"version":"0.9","records":[{"name":"john","phones":["1234567890"],"birthday":"01.01.2000"}]}"#,
    )
    .unwrap();

    let book = repo.load().unwrap();
    assert_eq!(book.find("john").unwrap().phones()[0].as_str(), "1234567890");
}
