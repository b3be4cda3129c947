// Unit tests for the JSON-backed credential store

use medibot::core::models::UserAccount;
use medibot::core::secret::SecretDigest;
use medibot::store::{JsonUserStore, UserStore};
use std::fs;
use tempfile::TempDir;

fn account(username: &str, email: &str, password: &str) -> UserAccount {
    UserAccount {
        email: email.to_string(),
        username: username.to_string(),
        password_hash: SecretDigest::from_secret(password),
    }
}

#[tokio::test]
async fn test_flush_then_reload_reproduces_accounts_exactly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");

    let store = JsonUserStore::load(&path);
    store
        .insert(account("ana", "ana@example.com", "hunter2"))
        .await
        .unwrap();
    store
        .insert(account("bo", "bo@example.com", "secret9"))
        .await
        .unwrap();

    let reloaded = JsonUserStore::load(&path);
    assert_eq!(reloaded.count().await, 2);

    let ana = reloaded.find_by_username("ana").await.unwrap();
    assert_eq!(ana, account("ana", "ana@example.com", "hunter2"));
    let bo = reloaded.find_by_email("bo@example.com").await.unwrap();
    assert_eq!(bo, account("bo", "bo@example.com", "secret9"));
}

#[tokio::test]
async fn test_file_is_a_json_array_of_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");

    let store = JsonUserStore::load(&path);
    store
        .insert(account("ana", "ana@example.com", "hunter2"))
        .await
        .unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert!(parsed.is_array());
    assert_eq!(parsed[0]["username"], "ana");
    assert_eq!(parsed[0]["email"], "ana@example.com");
    // The stored representation is the digest, never the plaintext.
    assert_ne!(parsed[0]["password_hash"], "hunter2");
}

#[tokio::test]
async fn test_insert_creates_missing_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("users.json");

    let store = JsonUserStore::load(&path);
    store
        .insert(account("ana", "ana@example.com", "hunter2"))
        .await
        .unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn test_each_registration_yields_exactly_one_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");

    let store = JsonUserStore::load(&path);
    for i in 0..5 {
        store
            .insert(account(
                &format!("user{}", i),
                &format!("user{}@example.com", i),
                "hunter2",
            ))
            .await
            .unwrap();
    }

    assert_eq!(store.count().await, 5);
    assert_eq!(JsonUserStore::load(&path).count().await, 5);
}

#[tokio::test]
async fn test_concurrent_inserts_of_same_username_yield_one_winner() {
    let dir = TempDir::new().unwrap();
    let store = std::sync::Arc::new(JsonUserStore::load(dir.path().join("users.json")));

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .insert(account("ana", &format!("ana{}@example.com", i), "hunter2"))
                .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1, "Exactly one concurrent insert may win");
    assert_eq!(store.count().await, 1);
}
