//! Utilities for splitting raw backtrace buffers into lines.
//!
//! A native crash handler dumps a captured stack trace as one opaque,
//! NUL-terminated text buffer, conventionally one frame or metadata entry
//! per line. Test code validating the trace formatter wants that buffer as
//! discrete, owned lines instead. This crate provides the splitting
//! contract: [`split_backtrace`] over already-borrowed text, and
//! [`split_backtrace_raw`] over the raw character buffer the handler
//! hands out.
//!
//! The splitter has no opinion on whether the content is a well-formed
//! stack trace; any text is accepted and split, and only a null buffer
//! reference is an error.

#![warn(missing_docs)]

mod error;
mod split;

pub use crate::error::InvalidBufferError;
pub use crate::split::{split_backtrace, split_backtrace_raw};
