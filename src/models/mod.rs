// src/models/mod.rs
//
// Models module - values that cross, or are projected from, the C boundary
//
// Structure:
//   result.rs - RustResult (#[repr(C)]) and its owned projection SdkResult

pub mod result;

// Re-exports for convenience
pub use result::{FAILURE_VALUE, RustResult, SdkResult};
