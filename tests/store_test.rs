use std::path::PathBuf;

use booktrack::error::BookError;
use booktrack::management::{
    BookManager, FileStore, MemoryStore, STORE_KEY_BOOKS, SilentNotifier, Store,
};
use booktrack::types::Book;

// Helper function to create a fresh scratch directory per test
fn scratch_dir(name: &str) -> PathBuf {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let dir = std::env::temp_dir().join(format!(
        "booktrack-test-{}-{}-{}",
        name,
        std::process::id(),
        nanos
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[tokio::test]
async fn test_memory_store_get_and_set() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("books").await.unwrap(), None);

    store.set("books", "[]").await.unwrap();
    store.set("books", "[1]").await.unwrap();

    assert_eq!(store.get("books").await.unwrap(), Some("[1]".to_string()));
    assert_eq!(store.value("books"), Some("[1]"));
}

#[tokio::test]
async fn test_file_store_missing_key_is_none() {
    let store = FileStore::new(scratch_dir("missing"));
    assert_eq!(store.get("books").await.unwrap(), None);
}

#[tokio::test]
async fn test_file_store_creates_directories_and_overwrites() {
    let dir = scratch_dir("write").join("nested");
    let mut store = FileStore::new(&dir);

    store.set("books", "[\"first\"]").await.unwrap();
    store.set("books", "[]").await.unwrap();

    assert_eq!(store.path_for("books"), dir.join("books.json"));
    assert_eq!(std::fs::read_to_string(dir.join("books.json")).unwrap(), "[]");
    assert_eq!(store.get("books").await.unwrap(), Some("[]".to_string()));

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_manager_survives_restart_on_file_store() {
    let dir = scratch_dir("restart");

    let mut manager = BookManager::new(FileStore::new(&dir), SilentNotifier).await;
    manager
        .add_book(Book::new("1", "Dune", "Frank Herbert", "Sci-Fi").with_progress(412, 100))
        .await
        .unwrap();
    manager.add_review("1", 5, "classic").await.unwrap();
    let books = manager.books().to_vec();
    drop(manager);

    let restarted = BookManager::new(FileStore::new(&dir), SilentNotifier).await;
    assert_eq!(restarted.books(), books.as_slice());
    assert!(dir.join(format!("{STORE_KEY_BOOKS}.json")).is_file());

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_export_and_import_files() {
    let dir = scratch_dir("transfer");
    std::fs::create_dir_all(&dir).unwrap();
    let export_path = dir.join("books.json");

    let mut source = BookManager::new(MemoryStore::new(), SilentNotifier).await;
    source.add_book(Book::new("1", "T", "A", "G")).await.unwrap();
    source.add_book(Book::new("2", "U", "B", "H")).await.unwrap();
    source.export_file(&export_path).await.unwrap();

    let mut target = BookManager::new(MemoryStore::new(), SilentNotifier).await;
    target.import_file(&export_path).await.unwrap();
    assert_eq!(target.books(), source.books());

    let result = target.import_file(&dir.join("absent.json")).await;
    assert!(matches!(result, Err(BookError::File { .. })));
    assert_eq!(target.len(), 2);

    let _ = std::fs::remove_dir_all(dir);
}
