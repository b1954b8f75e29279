// src/ffi/mod.rs
//
// All FFI functions for Swift/C interop live here.
// The C declarations are in include/rust_spm_sdk.h; keep the two in sync.

mod core;
mod scaffold;

// Boundary helpers, also used by the models and the safe wrapper
pub use self::scaffold::{OwnedCString, cstr_arg, guard};

// The #[no_mangle] extern "C" functions
pub use self::core::*;
