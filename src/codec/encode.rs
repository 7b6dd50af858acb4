//! Store encoding

use bytes::{BufMut, Bytes, BytesMut};

use super::{ITEM_FIXED_SIZE, LEN_SIZE, USER_FIXED_SIZE};
use crate::error::{Result, StoreError};
use crate::record::{Item, User};
use crate::store::Store;

/// Encode the full state of a store
pub fn encode(store: &Store) -> Result<Bytes> {
    encode_records(store.users(), store.items())
}

/// Encode users followed by items
///
/// Only fails with `Oversized` when a string or count does not fit in an
/// `i32` length prefix.
pub fn encode_records(users: &[User], items: &[Item]) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(encoded_len(users, items));

    put_len(&mut buf, "user count", users.len())?;
    for user in users {
        buf.put_i32_le(user.id);
        put_text(&mut buf, "user name", &user.name)?;
        put_text(&mut buf, "user description", &user.description)?;
        buf.put_i32_le(user.age);
        buf.put_u8(u8::from(user.active));
    }

    put_len(&mut buf, "item count", items.len())?;
    for item in items {
        buf.put_i32_le(item.id);
        put_text(&mut buf, "item name", &item.name)?;
        buf.put_f32_le(item.price);
        buf.put_i32_le(item.quantity);
        buf.put_i32_le(item.owner_id);
    }

    tracing::debug!(
        users = users.len(),
        items = items.len(),
        bytes = buf.len(),
        "encoded records"
    );

    Ok(buf.freeze())
}

/// Exact number of bytes `encode_records` produces
pub fn encoded_len(users: &[User], items: &[Item]) -> usize {
    let users_len: usize = users
        .iter()
        .map(|u| USER_FIXED_SIZE + u.name.len() + u.description.len())
        .sum();
    let items_len: usize = items.iter().map(|i| ITEM_FIXED_SIZE + i.name.len()).sum();

    LEN_SIZE + users_len + LEN_SIZE + items_len
}

fn put_len(buf: &mut BytesMut, field: &'static str, len: usize) -> Result<()> {
    let prefix = i32::try_from(len).map_err(|_| StoreError::Oversized { field, len })?;
    buf.put_i32_le(prefix);
    Ok(())
}

fn put_text(buf: &mut BytesMut, field: &'static str, text: &str) -> Result<()> {
    put_len(buf, field, text.len())?;
    buf.put_slice(text.as_bytes());
    Ok(())
}
