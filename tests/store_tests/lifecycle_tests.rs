//! Tests for store lifecycle and data processing
//!
//! These tests verify:
//! - initialize / cleanup transitions
//! - Mutations rejected while uninitialized
//! - process_data success and failure reporting

use recordstore::config::Config;
use recordstore::{DataProcessor, Item, Store, StoreError, StoreState};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_store() -> Store {
    let mut store = Store::new(Config::default());
    store.initialize();
    store
}

/// Processor that records what it was called with
struct RecordingProcessor {
    calls: Vec<(String, usize)>,
    code: i32,
}

impl DataProcessor for RecordingProcessor {
    fn process(&mut self, data: &str, len: usize) -> i32 {
        self.calls.push((data.to_string(), len));
        self.code
    }
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_new_store_is_uninitialized() {
    let store = Store::new(Config::default());

    assert_eq!(store.state(), StoreState::Uninitialized);
    assert!(!store.is_initialized());
    assert_eq!(store.error(), "");
}

#[test]
fn test_initialize_makes_ready() {
    let store = setup_store();

    assert_eq!(store.state(), StoreState::Ready);
    assert!(store.is_initialized());
}

#[test]
fn test_initialize_twice_keeps_records() {
    let mut store = setup_store();
    store.add_user(1, "Test User", "Description", 30).unwrap();

    store.initialize();

    assert!(store.get_user_by_id(1).is_some());
}

#[test]
fn test_cleanup_discards_everything() {
    let mut store = setup_store();
    store.add_user(1, "Test User", "Test Description", 30).unwrap();
    store.insert_item(Item::new(1, "Test Item", 100.0, 5, 1)).unwrap();

    store.cleanup();

    assert_eq!(store.state(), StoreState::Uninitialized);
    assert!(store.find_item(1).is_none());
    assert!(store.get_user_by_id(1).is_none());
    assert_eq!(store.user_count(), 0);
    assert_eq!(store.item_count(), 0);
}

#[test]
fn test_cleanup_twice_is_noop() {
    let mut store = setup_store();

    store.cleanup();
    store.cleanup();

    assert_eq!(store.state(), StoreState::Uninitialized);
}

#[test]
fn test_reinitialize_after_cleanup_starts_empty() {
    let mut store = setup_store();
    store.add_user(1, "Test User", "Description", 30).unwrap();
    store.cleanup();

    store.initialize();

    assert_eq!(store.user_count(), 0);
    assert_eq!(store.add_user(1, "again", "", 1).unwrap(), 1);
}

#[test]
fn test_mutations_rejected_when_uninitialized() {
    let mut store = Store::new(Config::default());

    assert!(matches!(
        store.add_user(1, "u", "d", 1),
        Err(StoreError::NotInitialized)
    ));
    assert!(matches!(store.remove_user(1), Err(StoreError::NotInitialized)));
    assert!(matches!(
        store.insert_item(Item::new(1, "i", 1.0, 1, 0)),
        Err(StoreError::NotInitialized)
    ));
    assert!(matches!(
        store.update_item_details(1, "i", 1.0, 1, false),
        Err(StoreError::NotInitialized)
    ));
    assert!(matches!(store.sort_items(), Err(StoreError::NotInitialized)));
    assert_eq!(store.error(), "System not initialized");
    assert_eq!(store.user_count(), 0);
}

#[test]
fn test_default_store_uses_default_config() {
    let store = Store::default();

    assert_eq!(store.config().max_users, 100);
    assert_eq!(store.config().max_items, 200);
    assert!(!store.is_initialized());
}

#[test]
fn test_huge_capacity_limits_do_not_preallocate() {
    let config = Config::builder()
        .max_users(usize::MAX)
        .max_items(usize::MAX)
        .build();

    let mut store = Store::new(config);
    store.initialize();

    assert_eq!(store.add_user(1, "u", "d", 1).unwrap(), 1);
    assert_eq!(store.insert_item(Item::new(1, "i", 1.0, 1, 1)).unwrap(), 1);
}

// =============================================================================
// Data Processing Tests
// =============================================================================

#[test]
fn test_process_data_success() {
    let mut store = setup_store();

    let result = store.process_data("Test data", &mut |_data: &str, _len: usize| 0);

    assert!(result.is_ok());
    assert_eq!(store.error(), "");
}

#[test]
fn test_process_data_failure() {
    let mut store = setup_store();

    let result = store.process_data("Test data", &mut |_data: &str, _len: usize| -1);

    assert!(matches!(result, Err(StoreError::ProcessingFailed { code: -1 })));
    assert_eq!(store.error(), "Data processing failed with code: -1");
}

#[test]
fn test_process_data_called_once_with_length() {
    let mut store = setup_store();
    let mut processor = RecordingProcessor {
        calls: Vec::new(),
        code: 0,
    };

    store.process_data("héllo", &mut processor).unwrap();

    assert_eq!(processor.calls, vec![("héllo".to_string(), 6)]);
}

#[test]
fn test_process_data_no_retry_on_failure() {
    let mut store = setup_store();
    let mut processor = RecordingProcessor {
        calls: Vec::new(),
        code: 3,
    };

    let result = store.process_data("payload", &mut processor);

    assert!(result.is_err());
    assert_eq!(processor.calls.len(), 1);
}

#[test]
fn test_process_data_allowed_before_initialize() {
    let mut store = Store::new(Config::default());

    assert!(store.process_data("x", &mut |_data: &str, _len: usize| 0).is_ok());
}
