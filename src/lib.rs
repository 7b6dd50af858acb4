//! # recordstore
//!
//! A small in-process record store with:
//! - Users with unique ids and a configurable capacity
//! - Items with a loose owner reference and price ordering
//! - A sticky last-error slot alongside typed `Result`s
//! - Persistence through a hand-written, length-prefixed binary format
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Caller                              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ add / remove / update / sort
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Store                                │
//! │            Vec<User> + Vec<Item> + last error               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ save_to_file / load_from_file
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Codec                                │
//! │          little-endian, length-prefixed records             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                ┌──────▼──────┐
//!                │  data file  │
//!                └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod codec;
pub mod process;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StoreError};
pub use config::Config;
pub use record::{Item, Notification, User};
pub use process::DataProcessor;
pub use store::{Store, StoreState};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of recordstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
