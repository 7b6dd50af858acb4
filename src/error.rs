//! Error types for recordstore
//!
//! Provides a unified error type for store and codec operations. The display
//! text of each variant is what the store keeps in its sticky error slot.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Which kind of record an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Item,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::User => f.write_str("User"),
            RecordKind::Item => f.write_str("Item"),
        }
    }
}

/// Whether a file was being opened for reading or writing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    Read,
    Write,
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileMode::Read => f.write_str("reading"),
            FileMode::Write => f.write_str("writing"),
        }
    }
}

/// Unified error type for recordstore operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("User ID already exists")]
    DuplicateId { id: i32 },

    #[error("Maximum number of {} reached", plural(.kind))]
    CapacityExceeded { kind: RecordKind, limit: usize },

    #[error("{kind} not found")]
    NotFound { kind: RecordKind, id: i32 },

    #[error("System not initialized")]
    NotInitialized,

    #[error("Data processing failed with code: {code}")]
    ProcessingFailed { code: i32 },

    // -------------------------------------------------------------------------
    // File Errors
    // -------------------------------------------------------------------------
    #[error("Failed to open file for {mode}")]
    FileOpenFailed {
        mode: FileMode,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Truncated input while reading {field}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("Malformed length for {field}: {len}")]
    MalformedLength { field: &'static str, len: i32 },

    #[error("Invalid UTF-8 in {field}")]
    InvalidText { field: &'static str },

    #[error("Invalid active flag: {value}")]
    InvalidFlag { value: u8 },

    #[error("{field} too large to encode: {len}")]
    Oversized { field: &'static str, len: usize },
}

fn plural(kind: &RecordKind) -> &'static str {
    match kind {
        RecordKind::User => "users",
        RecordKind::Item => "items",
    }
}
