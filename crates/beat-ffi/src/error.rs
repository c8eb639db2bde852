//! FFI Error handling

use std::ffi::{c_char, c_int, CString};

use beat_core::BeatError;

/// Error codes for FFI functions
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeatErrorCode {
    /// Success
    Ok = 0,
    /// Null pointer or out-of-range argument
    InvalidArgument = -1,
    /// Timestamp is NaN or infinite
    NonFiniteTimestamp = -2,
    /// Detail too high for the requested output
    DetailOutOfRange = -3,
    /// Output buffer too small
    BufferTooSmall = -4,
    /// Internal error
    InternalError = -99,
}

impl From<BeatErrorCode> for c_int {
    fn from(code: BeatErrorCode) -> Self {
        code as c_int
    }
}

impl From<&BeatError> for BeatErrorCode {
    fn from(err: &BeatError) -> Self {
        match err {
            BeatError::NonFiniteTimestamp(_) => BeatErrorCode::NonFiniteTimestamp,
            BeatError::DetailOutOfRange { .. } => BeatErrorCode::DetailOutOfRange,
            BeatError::TimestampOutOfRange(_) => BeatErrorCode::InvalidArgument,
        }
    }
}

thread_local! {
    static LAST_ERROR: std::cell::RefCell<Option<CString>> =
        const { std::cell::RefCell::new(None) };
}

/// Set the last error message
pub fn set_last_error(msg: &str) {
    tracing::warn!("beat ffi call rejected: {}", msg);
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Record a core error and return its code
pub fn fail(err: &BeatError) -> c_int {
    set_last_error(&err.to_string());
    BeatErrorCode::from(err).into()
}

/// Get the last error message
/// Returns NULL if no error
#[no_mangle]
pub extern "C" fn beat_get_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match e.borrow().as_ref() {
        Some(s) => s.as_ptr(),
        None => std::ptr::null(),
    })
}

/// Clear the last error
#[no_mangle]
pub extern "C" fn beat_clear_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}
