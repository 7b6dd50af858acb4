//! Store Module
//!
//! The owning collection of users and items.
//!
//! ## Responsibilities
//! - Enforce user id uniqueness and the configured capacity limits
//! - Lookup, removal and in-place update of records
//! - Price ordering of the item sequence
//! - Keep the most recent error message (the sticky error slot)
//! - Save to and load from the binary file format in `codec`
//!
//! ## Lifecycle
//! A store starts `Uninitialized`. `initialize()` makes it `Ready`;
//! `cleanup()` drops every record and returns it to `Uninitialized`.
//! Mutations on an uninitialized store fail with `NotInitialized`.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::codec::{self, Snapshot};
use crate::config::Config;
use crate::error::{FileMode, RecordKind, Result, StoreError};
use crate::process::DataProcessor;
use crate::record::{Item, Notification, User};

/// Lifecycle state of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Uninitialized,
    Ready,
}

/// In-process record store
///
/// Single owner, single thread: every mutation takes `&mut self`, so borrows
/// handed out by lookups cannot outlive the next mutating call.
#[derive(Debug)]
pub struct Store {
    /// Store configuration
    config: Config,

    state: StoreState,

    /// Users in insertion order
    users: Vec<User>,

    /// Items in sequence order (permuted by `sort_items`)
    items: Vec<Item>,

    /// Display text of the most recent failure
    last_error: String,
}

impl Store {
    /// Create an uninitialized store
    pub fn new(config: Config) -> Self {
        Self {
            users: Vec::new(),
            items: Vec::new(),
            config,
            state: StoreState::Uninitialized,
            last_error: String::new(),
        }
    }

    /// Create a ready store holding decoded records
    ///
    /// Records are taken as-is; capacity and uniqueness are not re-checked.
    pub fn from_snapshot(config: Config, snapshot: Snapshot) -> Self {
        Self {
            config,
            state: StoreState::Ready,
            users: snapshot.users,
            items: snapshot.items,
            last_error: String::new(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Make the store ready for use (no-op when already ready)
    pub fn initialize(&mut self) {
        if self.state == StoreState::Ready {
            return;
        }

        self.users.clear();
        self.items.clear();
        self.state = StoreState::Ready;
        tracing::info!("System initialized");
    }

    /// Drop every record and return to the uninitialized state
    pub fn cleanup(&mut self) {
        if self.state == StoreState::Uninitialized {
            return;
        }

        self.users.clear();
        self.items.clear();
        self.state = StoreState::Uninitialized;
        tracing::info!("System cleaned up");
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Add a new, active user and return its id
    ///
    /// Capacity is checked before uniqueness.
    pub fn add_user(&mut self, id: i32, name: &str, description: &str, age: i32) -> Result<i32> {
        self.ensure_ready()?;

        if self.users.len() >= self.config.max_users {
            return Err(self.record_error(StoreError::CapacityExceeded {
                kind: RecordKind::User,
                limit: self.config.max_users,
            }));
        }

        if self.users.iter().any(|u| u.id == id) {
            return Err(self.record_error(StoreError::DuplicateId { id }));
        }

        self.users.push(User::new(id, name, description, age, true));
        tracing::debug!(id, count = self.users.len(), "added user");

        Ok(id)
    }

    /// Remove the first user with `id`, keeping the order of the rest
    pub fn remove_user(&mut self, id: i32) -> Result<()> {
        self.ensure_ready()?;

        match self.users.iter().position(|u| u.id == id) {
            Some(index) => {
                self.users.remove(index);
                tracing::debug!(id, count = self.users.len(), "removed user");
                Ok(())
            }
            None => Err(self.record_error(StoreError::NotFound {
                kind: RecordKind::User,
                id,
            })),
        }
    }

    /// First user with `id` in insertion order
    pub fn get_user_by_id(&self, id: i32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Mutable access to the first user with `id`
    pub fn get_user_by_id_mut(&mut self, id: i32) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    /// Render a user's details and log them
    ///
    /// An unknown id is reported in the log and yields `None`; it is not
    /// treated as an error.
    pub fn display_user_info(&self, id: i32) -> Option<String> {
        match self.get_user_by_id(id) {
            Some(user) => {
                let text = user.to_string();
                tracing::info!("{}", text);
                Some(text)
            }
            None => {
                tracing::info!(id, "User not found");
                None
            }
        }
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Append an item and return its id
    ///
    /// Ids are not de-duplicated; lookups return the first match.
    pub fn insert_item(&mut self, item: Item) -> Result<i32> {
        self.ensure_ready()?;

        if self.items.len() >= self.config.max_items {
            return Err(self.record_error(StoreError::CapacityExceeded {
                kind: RecordKind::Item,
                limit: self.config.max_items,
            }));
        }

        let id = item.id;
        self.items.push(item);
        tracing::debug!(id, count = self.items.len(), "inserted item");

        Ok(id)
    }

    /// First item with `item_id` in current sequence order
    pub fn find_item(&self, item_id: i32) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Mutable access to the first item with `item_id`
    pub fn find_item_mut(&mut self, item_id: i32) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }

    /// Overwrite name, price and quantity of an existing item
    ///
    /// Never creates an item. With `notify` set, returns the notification
    /// sent to the item's owner when the owner id resolves to a user.
    pub fn update_item_details(
        &mut self,
        item_id: i32,
        name: &str,
        price: f32,
        quantity: i32,
        notify: bool,
    ) -> Result<Option<Notification>> {
        self.ensure_ready()?;

        let owner_id = match self.find_item_mut(item_id) {
            Some(item) => {
                item.name = name.to_owned();
                item.price = price;
                item.quantity = quantity;
                item.owner_id
            }
            None => {
                return Err(self.record_error(StoreError::NotFound {
                    kind: RecordKind::Item,
                    id: item_id,
                }))
            }
        };
        tracing::debug!(id = item_id, price, quantity, "updated item");

        if !notify {
            return Ok(None);
        }

        let notification = self.get_user_by_id(owner_id).map(|owner| Notification {
            user_id: owner.id,
            user_name: owner.name.clone(),
            item_id,
        });

        match &notification {
            Some(n) => tracing::info!(user_id = n.user_id, item_id, "{}", n),
            None => tracing::debug!(owner_id, item_id, "item owner not found, no notification"),
        }

        Ok(notification)
    }

    /// Order items by ascending price
    ///
    /// Stable. NaN prices of either sign sort after every number.
    pub fn sort_items(&mut self) -> Result<()> {
        self.ensure_ready()?;

        self.items.sort_by(|a, b| {
            a.price
                .is_nan()
                .cmp(&b.price.is_nan())
                .then(a.price.total_cmp(&b.price))
        });
        tracing::debug!(count = self.items.len(), "sorted items by price");

        Ok(())
    }

    // =========================================================================
    // Sticky Error
    // =========================================================================

    /// Overwrite the most recent error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = message.into();

        if self.config.debug_mode {
            tracing::warn!(error = %self.last_error, "store error");
        } else {
            tracing::debug!(error = %self.last_error, "store error");
        }
    }

    /// Most recent error message, empty until something fails
    pub fn error(&self) -> &str {
        &self.last_error
    }

    fn record_error(&mut self, err: StoreError) -> StoreError {
        self.set_error(err.to_string());
        err
    }

    fn ensure_ready(&mut self) -> Result<()> {
        if self.state != StoreState::Ready {
            return Err(self.record_error(StoreError::NotInitialized));
        }
        Ok(())
    }

    // =========================================================================
    // Processing
    // =========================================================================

    /// Run `processor` once over `data`
    ///
    /// A non-zero result code is logged, recorded and returned as
    /// `ProcessingFailed`. There is no retry.
    pub fn process_data<P>(&mut self, data: &str, processor: &mut P) -> Result<()>
    where
        P: DataProcessor + ?Sized,
    {
        let code = processor.process(data, data.len());
        if code != 0 {
            tracing::info!(code, "Data processing failed with code: {}", code);
            return Err(self.record_error(StoreError::ProcessingFailed { code }));
        }
        Ok(())
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the full store to `path`
    ///
    /// The file is truncated and written in place; a failure part way
    /// through leaves it incomplete.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        write_file(path, &self.users, &self.items).map_err(|e| self.record_error(e))?;
        tracing::info!(
            path = %path.display(),
            users = self.users.len(),
            items = self.items.len(),
            "saved store"
        );

        Ok(())
    }

    /// Replace the store's contents with the records in `path`
    ///
    /// The file is decoded before anything is discarded, so a failed load
    /// keeps the current records. Loaded records are not re-validated.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let snapshot = read_file(path).map_err(|e| self.record_error(e))?;

        self.cleanup();
        self.initialize();
        self.users = snapshot.users;
        self.items = snapshot.items;

        tracing::info!(
            path = %path.display(),
            users = self.users.len(),
            items = self.items.len(),
            "loaded store"
        );

        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Users in insertion order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Items in current sequence order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of items
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Current lifecycle state
    pub fn state(&self) -> StoreState {
        self.state
    }

    /// Whether the store is ready
    pub fn is_initialized(&self) -> bool {
        self.state == StoreState::Ready
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn write_file(path: &Path, users: &[User], items: &[Item]) -> Result<()> {
    let file = File::create(path).map_err(|source| StoreError::FileOpenFailed {
        mode: FileMode::Write,
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    codec::write_records(&mut writer, users, items)
}

fn read_file(path: &Path) -> Result<Snapshot> {
    let file = File::open(path).map_err(|source| StoreError::FileOpenFailed {
        mode: FileMode::Read,
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = BufReader::new(file);
    codec::read_records(&mut reader)
}
