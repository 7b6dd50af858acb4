//! Store decoding
//!
//! Every read is bounds-checked against the remaining input, so corrupted or
//! truncated data surfaces as an error value instead of a panic.

use bytes::Buf;

use super::{Snapshot, ITEM_FIXED_SIZE, USER_FIXED_SIZE};
use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::record::{Item, User};
use crate::store::Store;

/// Decode bytes into a fresh, ready store with default config
pub fn decode(bytes: &[u8]) -> Result<Store> {
    let snapshot = decode_records(bytes)?;
    Ok(Store::from_snapshot(Config::default(), snapshot))
}

/// Decode bytes into users and items, in file order
pub fn decode_records(bytes: &[u8]) -> Result<Snapshot> {
    let mut buf = bytes;

    let user_count = read_len(&mut buf, "user count")?;
    // Capacity is bounded by what the input could actually hold
    let mut users = Vec::with_capacity(user_count.min(buf.remaining() / USER_FIXED_SIZE));
    for _ in 0..user_count {
        users.push(read_user(&mut buf)?);
    }

    let item_count = read_len(&mut buf, "item count")?;
    let mut items = Vec::with_capacity(item_count.min(buf.remaining() / ITEM_FIXED_SIZE));
    for _ in 0..item_count {
        items.push(read_item(&mut buf)?);
    }

    if buf.has_remaining() {
        tracing::warn!(
            trailing = buf.remaining(),
            "ignoring trailing bytes after item records"
        );
    }

    tracing::debug!(
        users = users.len(),
        items = items.len(),
        bytes = bytes.len(),
        "decoded records"
    );

    Ok(Snapshot { users, items })
}

fn read_user(buf: &mut &[u8]) -> Result<User> {
    let id = read_i32(buf, "user id")?;
    let name = read_text(buf, "user name")?;
    let description = read_text(buf, "user description")?;
    let age = read_i32(buf, "user age")?;
    let active = match read_u8(buf, "user active flag")? {
        0 => false,
        1 => true,
        value => return Err(StoreError::InvalidFlag { value }),
    };

    Ok(User {
        id,
        name,
        description,
        age,
        active,
    })
}

fn read_item(buf: &mut &[u8]) -> Result<Item> {
    let id = read_i32(buf, "item id")?;
    let name = read_text(buf, "item name")?;
    let price = read_f32(buf, "item price")?;
    let quantity = read_i32(buf, "item quantity")?;
    let owner_id = read_i32(buf, "item owner id")?;

    Ok(Item {
        id,
        name,
        price,
        quantity,
        owner_id,
    })
}

// =============================================================================
// Primitive readers
// =============================================================================

fn ensure(buf: &[u8], field: &'static str, needed: usize) -> Result<()> {
    if buf.remaining() < needed {
        return Err(StoreError::TruncatedInput {
            field,
            needed,
            remaining: buf.remaining(),
        });
    }
    Ok(())
}

fn read_i32(buf: &mut &[u8], field: &'static str) -> Result<i32> {
    ensure(buf, field, 4)?;
    Ok(buf.get_i32_le())
}

fn read_f32(buf: &mut &[u8], field: &'static str) -> Result<f32> {
    ensure(buf, field, 4)?;
    Ok(buf.get_f32_le())
}

fn read_u8(buf: &mut &[u8], field: &'static str) -> Result<u8> {
    ensure(buf, field, 1)?;
    Ok(buf.get_u8())
}

/// Read a count or length prefix, rejecting negative values
fn read_len(buf: &mut &[u8], field: &'static str) -> Result<usize> {
    let len = read_i32(buf, field)?;
    usize::try_from(len).map_err(|_| StoreError::MalformedLength { field, len })
}

fn read_text(buf: &mut &[u8], field: &'static str) -> Result<String> {
    let len = read_len(buf, field)?;
    ensure(buf, field, len)?;

    let input: &[u8] = *buf;
    let (raw, rest) = input.split_at(len);
    let text = std::str::from_utf8(raw)
        .map_err(|_| StoreError::InvalidText { field })?
        .to_owned();
    *buf = rest;

    Ok(text)
}
