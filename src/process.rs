//! Data processing strategy
//!
//! `Store::process_data` hands a piece of text to a caller-supplied processor
//! exactly once and treats any non-zero result code as a failure.

/// A pluggable processor taking text and its byte length
///
/// Returns `0` on success; any other value is a failure code.
pub trait DataProcessor {
    fn process(&mut self, data: &str, len: usize) -> i32;
}

impl<F> DataProcessor for F
where
    F: FnMut(&str, usize) -> i32,
{
    fn process(&mut self, data: &str, len: usize) -> i32 {
        self(data, len)
    }
}
