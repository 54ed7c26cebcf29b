use std::ffi::CStr;
use std::os::raw::c_char;

use crate::error::InvalidBufferError;

/// Splits backtrace text into its newline-delimited lines.
///
/// The logical content ends at the first NUL byte, if any, mirroring the
/// NUL-terminated buffers a crash handler produces. Each returned line is
/// an owned copy excluding its delimiting newline. Empty lines between
/// consecutive newlines are preserved, while a single trailing newline
/// does not open an additional empty line, so empty content yields an
/// empty vector.
pub fn split_backtrace(content: &str) -> Vec<String> {
    let content = match content.find('\0') {
        Some(end) => &content[..end],
        None => content,
    };
    split_content(content.as_bytes())
}

/// Splits a raw NUL-terminated backtrace buffer into lines.
///
/// Fails with [`InvalidBufferError`] if `buffer` is null. Any non-null
/// buffer is accepted: its content is read up to the NUL terminator,
/// treated as single-byte characters (bytes that are not valid UTF-8 are
/// carried through lossily), and split like [`split_backtrace`].
///
/// # Safety
///
/// A non-null `buffer` must point to a readable, NUL-terminated character
/// buffer that remains valid for the duration of the call.
pub unsafe fn split_backtrace_raw(
    buffer: *const c_char,
) -> Result<Vec<String>, InvalidBufferError> {
    if buffer.is_null() {
        return Err(InvalidBufferError);
    }
    // SAFETY: non-null was checked above; the caller guarantees a readable
    // NUL-terminated buffer.
    let content = unsafe { CStr::from_ptr(buffer) };
    Ok(split_content(content.to_bytes()))
}

/// Single forward pass: close the pending line on every newline, then
/// flush whatever is still pending. An empty pending segment at the end
/// means the content ended exactly on a newline (or was empty) and is not
/// flushed.
fn split_content(content: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending = Vec::new();

    for &byte in content {
        if byte == b'\n' {
            lines.push(String::from_utf8_lossy(&pending).into_owned());
            pending.clear();
        } else {
            pending.push(byte);
        }
    }

    if !pending.is_empty() {
        lines.push(String::from_utf8_lossy(&pending).into_owned());
    }

    lines
}
