use std::ffi::CString;

use backtrace_lines::{split_backtrace, split_backtrace_raw, InvalidBufferError};

// A dump shaped like the output of an Android native crash handler: a
// couple of metadata headers followed by one frame per line.
const CRASH_DUMP: &str = "\
signal 11 (SIGSEGV), code 1 (SEGV_MAPERR), fault addr 0x0
backtrace:
#00 pc 000000000001f123  /system/lib64/libc.so (abort+64)
#01 pc 000000000000d456  /data/app/lib/libcrashtest.so (trigger_crash+12)
#02 pc 00000000000a7890  /data/app/lib/libcrashtest.so
";

#[test]
fn test_split_crash_dump() {
    let lines = split_backtrace(CRASH_DUMP);
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "signal 11 (SIGSEGV), code 1 (SEGV_MAPERR), fault addr 0x0"
    );
    assert_eq!(lines[1], "backtrace:");
    assert!(lines[2].starts_with("#00 pc "));
    assert!(lines[4].ends_with("libcrashtest.so"));
}

#[test]
fn test_split_crash_dump_from_raw_buffer() {
    let buffer = CString::new(CRASH_DUMP).unwrap();
    let lines = unsafe { split_backtrace_raw(buffer.as_ptr()) }.unwrap();
    assert_eq!(lines, split_backtrace(CRASH_DUMP));
}

#[test]
fn test_null_buffer_is_rejected() {
    let err = unsafe { split_backtrace_raw(std::ptr::null()) }.unwrap_err();
    assert_eq!(err, InvalidBufferError);
    assert_eq!(
        err.to_string(),
        "invalid backtrace buffer: null reference"
    );
}
