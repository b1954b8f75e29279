// src/ffi/scaffold.rs
//
// Helpers shared by the exported functions: reading borrowed C strings,
// owning the strings we hand out, and keeping panics on our side.

use std::ffi::{CStr, CString, c_char};
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::Result;

/// Borrow a caller-owned C string for the duration of a call.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated buffer that stays valid
/// and unmodified for `'a`.
pub unsafe fn cstr_arg<'a>(ptr: *const c_char) -> Option<&'a CStr> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(ptr) })
    }
}

/// A C string allocated by this library.
///
/// Dropping it frees the buffer. `into_raw` hands ownership to the caller,
/// who gives it back through `rust_sdk_free_string`.
#[derive(Debug)]
pub struct OwnedCString(CString);

impl OwnedCString {
    pub fn new(s: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self(CString::new(s)?))
    }

    pub fn as_c_str(&self) -> &CStr {
        self.0.as_c_str()
    }

    pub fn into_raw(self) -> *mut c_char {
        self.0.into_raw()
    }

    /// Re-adopt a pointer produced by `into_raw`. Null gives `None`.
    ///
    /// # Safety
    /// `ptr` must be null or come from `OwnedCString::into_raw` and not have
    /// been re-adopted since.
    pub unsafe fn from_raw(ptr: *mut c_char) -> Option<Self> {
        if ptr.is_null() {
            None
        } else {
            Some(Self(unsafe { CString::from_raw(ptr) }))
        }
    }
}

/// Run `body`, turning a panic into `fallback()` so nothing unwinds into
/// foreign frames.
pub fn guard<T>(name: &'static str, fallback: impl FnOnce() -> T, body: impl FnOnce() -> T) -> T {
    catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|_| {
        tracing::error!("panic during {name}");
        fallback()
    })
}
