// src/models/result.rs
//
// Result value returned by rust_sdk_process_string, plus the owned form the
// Rust wrapper hands out once the boundary string has been released.

use std::ffi::{CStr, c_char};
use std::ptr;

use serde::Serialize;

use crate::ffi::rust_sdk_free_string;

/// `value` written on every failure. Callers still must not rely on it.
pub const FAILURE_VALUE: i32 = -1;

// ═══════════════════════════════════════════════════════════════════════════
// BOUNDARY VALUE
// ═══════════════════════════════════════════════════════════════════════════

/// Flat result struct; layout matches `RustResult` in rust_spm_sdk.h.
///
/// A non-null `message` is owned by the caller and must be passed to
/// `rust_sdk_free_string` exactly once.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RustResult {
    pub success: bool,
    pub value: i32,
    pub message: *const c_char,
}

impl RustResult {
    pub fn ok(value: i32, message: *const c_char) -> Self {
        Self { success: true, value, message }
    }

    pub fn failure(message: *const c_char) -> Self {
        Self { success: false, value: FAILURE_VALUE, message }
    }

    /// Failure with no message, used when even the diagnostic can't be built.
    pub fn bare_failure() -> Self {
        Self::failure(ptr::null())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// OWNED PROJECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SdkResult {
    pub success: bool,
    pub value: i32,
    pub message: Option<String>,
}

impl SdkResult {
    /// Copy out of a boundary result and release its message.
    ///
    /// # Safety
    /// `raw` must come straight from `rust_sdk_process_string` and its
    /// message must not have been released already.
    pub unsafe fn take(raw: RustResult) -> Self {
        let message = if raw.message.is_null() {
            None
        } else {
            let copied = unsafe { CStr::from_ptr(raw.message) }.to_string_lossy().into_owned();
            unsafe { rust_sdk_free_string(raw.message as *mut c_char) };
            Some(copied)
        };
        Self { success: raw.success, value: raw.value, message }
    }

    /// Failure detected on the Rust side before reaching the boundary.
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, value: FAILURE_VALUE, message: Some(message.into()) }
    }
}
