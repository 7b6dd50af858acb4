//! Stream-based I/O helpers
//!
//! Whole-buffer reads and writes over `std::io` streams. Nothing is staged:
//! a failure part way through a write leaves the destination incomplete.

use std::io::{Read, Write};

use super::{decode, decode_records, encode, encode_records, Snapshot};
use crate::error::Result;
use crate::record::{Item, User};
use crate::store::Store;

/// Encode a store and write it to a stream
pub fn write_store<W: Write>(writer: &mut W, store: &Store) -> Result<()> {
    let bytes = encode(store)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Encode records and write them to a stream
pub fn write_records<W: Write>(writer: &mut W, users: &[User], items: &[Item]) -> Result<()> {
    let bytes = encode_records(users, items)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Read a stream to its end and decode it into a fresh store
pub fn read_store<R: Read>(reader: &mut R) -> Result<Store> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}

/// Read a stream to its end and decode the records
pub fn read_records<R: Read>(reader: &mut R) -> Result<Snapshot> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_records(&bytes)
}
