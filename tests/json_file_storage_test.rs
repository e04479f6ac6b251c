//! Tests for the on-disk contact store

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use rcontacts::application::services::{ContactRepository, ContactService};
use rcontacts::application::ApplicationError;
use rcontacts::domain::NewContact;
use rcontacts::infrastructure::traits::{ContactStorage, FixedClock, JsonFileStorage};
use rcontacts::util::testing;

/// Helper to create a contacts file for testing
fn create_db(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("contacts.json");
    fs::write(&path, content).expect("write contacts file");
    path
}

fn service_for(path: &PathBuf) -> ContactService {
    testing::init_test_setup();
    ContactService::new(
        Arc::new(JsonFileStorage::new(path.clone())),
        Arc::new(FixedClock::new(1_000)),
    )
}

#[tokio::test]
async fn given_file_when_reading_then_returns_raw_document() {
    let temp = TempDir::new().unwrap();
    let path = create_db(&temp, "[]");
    let storage = JsonFileStorage::new(&path);

    assert_eq!(storage.read().await.unwrap(), "[]");
    assert_eq!(storage.location(), path.display().to_string());
}

#[tokio::test]
async fn given_file_when_writing_then_replaces_whole_content() {
    let temp = TempDir::new().unwrap();
    let path = create_db(&temp, "[\n  {}\n]");
    let storage = JsonFileStorage::new(&path);

    storage.write("[]").await.unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[tokio::test]
async fn given_hand_written_file_when_listing_then_preserves_order() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_db(
        &temp,
        r#"[
  {"id": "b", "name": "Bo", "email": "bo@x.com", "phone": "2"},
  {"id": "a", "name": "Ann", "email": "ann@x.com", "phone": "1"}
]"#,
    );
    let service = service_for(&path);

    // Act
    let contacts = service.list().await.unwrap();

    // Assert
    let ids: Vec<_> = contacts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[tokio::test]
async fn given_file_when_adding_and_removing_then_file_reflects_each_step() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_db(&temp, "[]");
    let service = service_for(&path);

    // Act
    let ann = service
        .add(NewContact::new("Ann", "ann@x.com", "111"))
        .await
        .unwrap();

    // Assert
    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(on_disk.starts_with("[\n  {\n    \"id\": \"1000\""));
    assert!(!on_disk.ends_with('\n'));

    service.remove(&ann.id).await.unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[tokio::test]
async fn given_unknown_id_when_removing_then_file_bytes_unchanged() {
    let temp = TempDir::new().unwrap();
    let original = r#"[{"id":"1","name":"Ann","email":"ann@x.com","phone":"111"}]"#;
    let path = create_db(&temp, original);
    let service = service_for(&path);

    assert_eq!(service.remove("2").await.unwrap(), None);

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[tokio::test]
async fn given_nonexistent_file_when_listing_then_read_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.json");
    let service = service_for(&path);

    let result = service.list().await;

    match result {
        Err(ApplicationError::StoreRead { location, source }) => {
            assert_eq!(location, path.display().to_string());
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected StoreRead, got {:?}", other),
    }
    assert!(!path.exists());
}

#[tokio::test]
async fn given_missing_parent_dir_when_writing_then_write_error() {
    let temp = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(temp.path().join("nope").join("contacts.json"));

    assert!(storage.write("[]").await.is_err());
}

#[tokio::test]
async fn given_nonexistent_file_when_listing_then_message_carries_os_cause() {
    let temp = TempDir::new().unwrap();
    let service = service_for(&temp.path().join("missing.json"));

    let err = service.list().await.unwrap_err();

    let cause = std::error::Error::source(&err).unwrap().to_string();
    assert!(err.to_string().ends_with(&cause));
}

#[tokio::test]
async fn given_directory_as_db_path_when_listing_then_message_carries_os_cause() {
    let temp = TempDir::new().unwrap();
    let service = service_for(&temp.path().to_path_buf());

    let err = service.list().await.unwrap_err();

    assert!(matches!(err, ApplicationError::StoreRead { .. }));
    let cause = std::error::Error::source(&err).unwrap().to_string();
    assert!(!cause.is_empty());
    assert!(err.to_string().ends_with(&cause));
}
