// src/sdk.rs
//
// Safe Rust face of the C surface. It goes through the exported functions
// rather than calling compute directly, so Rust users exercise the same
// ownership path as Swift/C callers.

use std::ffi::{CStr, CString};

use crate::compute;
use crate::ffi::{
    rust_sdk_add, rust_sdk_fibonacci, rust_sdk_init, rust_sdk_is_ready, rust_sdk_process_string,
    rust_sdk_version,
};
use crate::models::SdkResult;

/// Zero-sized handle; all state is process-wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustSdk;

static SHARED: RustSdk = RustSdk;

impl RustSdk {
    pub fn shared() -> &'static RustSdk {
        &SHARED
    }

    pub fn initialize(&self) -> bool {
        rust_sdk_init()
    }

    pub fn is_ready(&self) -> bool {
        rust_sdk_is_ready()
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        rust_sdk_add(a, b)
    }

    /// Process `input`. Any message is copied out and released before
    /// returning, so the result holds no boundary memory.
    pub fn process_string(&self, input: &str) -> SdkResult {
        let input = match CString::new(input) {
            Ok(c) => c,
            Err(e) => {
                return SdkResult::failure(format!(
                    "input has a NUL byte at offset {}",
                    e.nul_position()
                ));
            }
        };
        // input outlives the call and the result comes straight from it
        unsafe { SdkResult::take(rust_sdk_process_string(input.as_ptr())) }
    }

    pub fn fibonacci(&self, n: i32) -> i64 {
        rust_sdk_fibonacci(n)
    }

    /// Copy of the static version string. The pointer itself is never freed.
    pub fn version(&self) -> String {
        unsafe { CStr::from_ptr(rust_sdk_version()) }.to_string_lossy().into_owned()
    }

    /// Average time per add call, in milliseconds.
    pub fn benchmark(&self, iterations: u32) -> f64 {
        compute::benchmark_add(iterations).as_secs_f64() * 1000.0
    }
}
