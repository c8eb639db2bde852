#![allow(clippy::missing_safety_doc)]
//! Beat FFI - Foreign Function Interface
//!
//! C-compatible bindings for embedding Internet Time in host applications.
//! Integer timestamps are `int64_t` milliseconds, fractional ones `double`.

pub mod convert;
pub mod error;

use std::ffi::c_char;

pub use convert::*;
pub use error::*;

/// Library version
#[no_mangle]
pub extern "C" fn beat_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
