use crate::compute;
use crate::error::SdkError;
use crate::ffi::scaffold::*;
use crate::models::RustResult;
use std::ffi::c_char;

static VERSION_C: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();

// ---------- FFI: lifecycle ----------

/// Initialize the SDK. Safe to call any number of times from any thread;
/// every call reports the outcome of the first initialization.
#[unsafe(no_mangle)]
pub extern "C" fn rust_sdk_init() -> bool {
    guard("rust_sdk_init", || false, || crate::ensure_initialized().is_ok())
}

/// Check if a previous rust_sdk_init succeeded. Never initializes.
#[unsafe(no_mangle)]
pub extern "C" fn rust_sdk_is_ready() -> bool {
    crate::system().is_some()
}

/// SDK version, statically allocated. Never pass it to rust_sdk_free_string.
#[unsafe(no_mangle)]
pub extern "C" fn rust_sdk_version() -> *const c_char {
    VERSION_C.as_ptr() as *const c_char
}

// ---------- FFI: compute ----------

#[unsafe(no_mangle)]
pub extern "C" fn rust_sdk_add(a: i32, b: i32) -> i32 {
    compute::add(a, b)
}

/// Calculate the n-th Fibonacci number. Wraps past n = 92; negative n is
/// returned unchanged.
#[unsafe(no_mangle)]
pub extern "C" fn rust_sdk_fibonacci(n: i32) -> i64 {
    guard("rust_sdk_fibonacci", || 0, || compute::fibonacci(n))
}

// ---------- FFI: strings ----------

/// Process a string and return a result whose message the caller owns.
///
/// # Safety
/// `input` must be null or a NUL-terminated string valid for the whole
/// call. It is only read, never retained or freed. A non-null
/// `message` in the result must be released with `rust_sdk_free_string`
/// exactly once.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rust_sdk_process_string(input: *const c_char) -> RustResult {
    guard("rust_sdk_process_string", RustResult::bare_failure, || {
        let input = unsafe { cstr_arg(input) };
        let processed = match input.ok_or(SdkError::NullInput).and_then(compute::process) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "rust_sdk_process_string failed");
                return failure_result(&e);
            }
        };
        tracing::debug!(length = processed.length, "processed string");

        match OwnedCString::new(processed.summary) {
            Ok(message) => RustResult::ok(processed.length, message.into_raw()),
            Err(e) => {
                tracing::warn!(error = %e, "could not allocate result message");
                RustResult::bare_failure()
            }
        }
    })
}

/// Free a string previously returned by this library. Null is a no-op.
///
/// # Safety
/// - `ptr` must be null or a `message` from `rust_sdk_process_string`
/// - `ptr` must not be freed twice, and must not be the version string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rust_sdk_free_string(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    guard("rust_sdk_free_string", || (), || {
        drop(unsafe { OwnedCString::from_raw(ptr) });
    });
}

fn failure_result(err: &SdkError) -> RustResult {
    match OwnedCString::new(err.to_string()) {
        Ok(message) => RustResult::failure(message.into_raw()),
        Err(_) => RustResult::bare_failure(),
    }
}
