use super::*;

#[test]
fn memory_store_reads_none_when_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.read("theme"), Ok(None));
}

#[test]
fn memory_store_write_overwrites() {
    let store = MemoryStore::new();
    store.write("theme", "dark-mode").unwrap();
    store.write("theme", "light-mode").unwrap();
    assert_eq!(store.read("theme"), Ok(Some("light-mode".to_owned())));
}

#[test]
fn memory_store_with_entry_is_seeded() {
    let store = MemoryStore::with_entry("theme", "light-mode");
    assert_eq!(store.peek("theme").as_deref(), Some("light-mode"));
    assert_eq!(store.peek("other"), None);
}

#[test]
fn unavailable_store_fails_both_ways() {
    let store = MemoryStore::unavailable();
    assert_eq!(store.read("theme"), Err(StorageError::Unavailable));
    assert_eq!(store.write("theme", "x"), Err(StorageError::Unavailable));
    assert_eq!(store.peek("theme"), None);
}

#[test]
fn availability_can_be_restored() {
    let store = MemoryStore::with_entry("theme", "dark-mode");
    store.set_available(false);
    assert!(store.read("theme").is_err());
    store.set_available(true);
    assert_eq!(store.read("theme"), Ok(Some("dark-mode".to_owned())));
}

#[test]
fn storage_error_messages_are_descriptive() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(StorageError::Write("QuotaExceededError".into()).to_string(), "storage write failed: QuotaExceededError");
}
