//! Codec Module
//!
//! Hand-written binary encoding of the full store state.
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ UserCount: i32                                               │
//! ├──────────────────────────────────────────────────────────────┤
//! │ User (repeated UserCount times)                              │
//! │ ┌────────┬─────────┬──────┬─────────┬──────┬────────┬──────┐ │
//! │ │ Id (4) │NameLen 4│ Name │DescLen 4│ Desc │ Age (4)│Act(1)│ │
//! │ └────────┴─────────┴──────┴─────────┴──────┴────────┴──────┘ │
//! ├──────────────────────────────────────────────────────────────┤
//! │ ItemCount: i32                                               │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Item (repeated ItemCount times)                              │
//! │ ┌────────┬─────────┬──────┬─────────┬─────────┬──────────┐   │
//! │ │ Id (4) │NameLen 4│ Name │Price f32│ Qty (4) │ Owner (4)│   │
//! │ └────────┴─────────┴──────┴─────────┴─────────┴──────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - All integers are signed 32-bit little-endian, the price is an
//!   IEEE-754 `f32`, and the active flag is a single `0`/`1` byte
//! - Strings are UTF-8 with an explicit length and no terminator
//! - No header, magic or version field; no padding between fields
//! - Decoding trusts the content: duplicate ids and dangling owners are
//!   loaded as written

mod decode;
mod encode;
mod stream;

pub use decode::{decode, decode_records};
pub use encode::{encode, encode_records, encoded_len};
pub use stream::{read_records, read_store, write_records, write_store};

use crate::record::{Item, User};

// =============================================================================
// Layout Constants
// =============================================================================

/// Size of a count or length prefix
pub const LEN_SIZE: usize = 4;

/// Fixed part of a user record: id + two length prefixes + age + flag
pub const USER_FIXED_SIZE: usize = 4 + LEN_SIZE + LEN_SIZE + 4 + 1;

/// Fixed part of an item record: id + length prefix + price + qty + owner
pub const ITEM_FIXED_SIZE: usize = 4 + LEN_SIZE + 4 + 4 + 4;

// =============================================================================
// Snapshot
// =============================================================================

/// The decoded contents of an encoded store, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub items: Vec<Item>,
}
