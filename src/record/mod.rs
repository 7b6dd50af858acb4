//! Record Module
//!
//! The two entity types the store owns.
//!
//! ## Ownership
//! - The `Store` holds every `User` and `Item` by value
//! - Lookups hand out borrows tied to the store, never copies
//! - `Item::owner_id` is a plain id, not a checked reference; a dangling
//!   owner is allowed

mod item;
mod user;

pub use item::{Item, Notification};
pub use user::User;
