use thiserror::Error;

/// Raised if a backtrace buffer reference cannot be dereferenced.
///
/// This marks a contract violation on the calling side rather than bad
/// buffer content; callers are expected to fail fast instead of retrying.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid backtrace buffer: null reference")]
pub struct InvalidBufferError;
