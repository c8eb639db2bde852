//! FFI conversion functions

use std::ffi::{c_char, c_int};
use std::ptr;

use beat_core::{BeatError, Timestamp, BEAT, CENTIBEAT};

use crate::error::*;

/// Highest detail whose value fits in a `uint64_t` (1000 * 10^16 < 2^64)
pub const MAX_FFI_DETAIL: u32 = 16;

/// Milliseconds per beat
#[no_mangle]
pub extern "C" fn beat_ms_per_beat() -> u32 {
    BEAT
}

/// Milliseconds per centibeat
#[no_mangle]
pub extern "C" fn beat_ms_per_centibeat() -> u32 {
    CENTIBEAT
}

/// Elapsed milliseconds as beats (no offset, no wrap)
#[no_mangle]
pub extern "C" fn beat_in_beats(duration_ms: i64) -> f64 {
    beat_time::in_beats(Timestamp::from_millis(duration_ms))
}

/// Elapsed milliseconds as centibeats (no offset, no wrap)
#[no_mangle]
pub extern "C" fn beat_in_centibeats(duration_ms: i64) -> f64 {
    beat_time::in_centibeats(Timestamp::from_millis(duration_ms))
}

/// Time of day in units of 10^-detail beats
/// Writes the value to `out`; returns 0 on success, negative on error.
/// Detail above `MAX_FFI_DETAIL` fails with `DetailOutOfRange`.
#[no_mangle]
pub unsafe extern "C" fn beat_convert(detail: u32, timestamp_ms: i64, out: *mut u64) -> c_int {
    write_value(detail, Timestamp::from_millis(timestamp_ms), out)
}

/// Same as `beat_convert` for fractional milliseconds
#[no_mangle]
pub unsafe extern "C" fn beat_convert_f64(detail: u32, timestamp_ms: f64, out: *mut u64) -> c_int {
    match Timestamp::from_millis_f64(timestamp_ms) {
        Ok(timestamp) => write_value(detail, timestamp, out),
        Err(err) => fail(&err),
    }
}

/// Time of day as NUL-terminated text, e.g. "333.25" at detail 2
/// Returns the number of bytes written (without the NUL), or negative on error
#[no_mangle]
pub unsafe extern "C" fn beat_display(
    detail: u32,
    timestamp_ms: i64,
    out_buf: *mut c_char,
    buf_len: usize,
) -> c_int {
    write_text(detail, Timestamp::from_millis(timestamp_ms), out_buf, buf_len)
}

/// Same as `beat_display` for fractional milliseconds
#[no_mangle]
pub unsafe extern "C" fn beat_display_f64(
    detail: u32,
    timestamp_ms: f64,
    out_buf: *mut c_char,
    buf_len: usize,
) -> c_int {
    match Timestamp::from_millis_f64(timestamp_ms) {
        Ok(timestamp) => write_text(detail, timestamp, out_buf, buf_len),
        Err(err) => fail(&err),
    }
}

/// Text length of a display at `detail`, without the NUL
pub fn display_len(detail: u32) -> usize {
    3 + detail as usize + usize::from(detail > 0)
}

unsafe fn write_value(detail: u32, timestamp: Timestamp, out: *mut u64) -> c_int {
    if out.is_null() {
        set_last_error("Null pointer");
        return BeatErrorCode::InvalidArgument as c_int;
    }
    if detail > MAX_FFI_DETAIL {
        return fail(&BeatError::DetailOutOfRange {
            detail,
            max: MAX_FFI_DETAIL,
        });
    }

    match beat_time::convert(detail, timestamp).map(u64::try_from) {
        Ok(Ok(value)) => {
            *out = value;
            BeatErrorCode::Ok as c_int
        }
        Ok(Err(_)) => {
            set_last_error("Value does not fit in 64 bits");
            BeatErrorCode::InternalError as c_int
        }
        Err(err) => fail(&err),
    }
}

unsafe fn write_text(
    detail: u32,
    timestamp: Timestamp,
    out_buf: *mut c_char,
    buf_len: usize,
) -> c_int {
    if out_buf.is_null() {
        set_last_error("Null pointer");
        return BeatErrorCode::InvalidArgument as c_int;
    }

    let len = display_len(detail);
    if len > c_int::MAX as usize {
        set_last_error("Detail too large");
        return BeatErrorCode::InvalidArgument as c_int;
    }
    if buf_len <= len {
        set_last_error("Buffer too small");
        return BeatErrorCode::BufferTooSmall as c_int;
    }

    let text = beat_time::display(detail, timestamp);
    debug_assert_eq!(text.len(), len);
    ptr::copy_nonoverlapping(text.as_ptr(), out_buf as *mut u8, len);
    *out_buf.add(len) = 0;
    len as c_int
}
