//! Rust core of the Swift package SDK.
//!
//! The C surface lives in [`ffi`] and is declared in
//! `include/rust_spm_sdk.h`. Every string this library hands out is
//! released through `rust_sdk_free_string`; the version string is static
//! and never released. Failures cross the boundary as data (a `false`
//! flag plus an optional message), never as unwinding.

use std::time::{Duration, Instant};

use once_cell::sync::OnceCell;

pub mod compute;
pub mod config;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod models;
pub mod sdk;

pub use config::SdkConfig;
pub use error::SdkError;
pub use ffi::*;
pub use models::{FAILURE_VALUE, RustResult, SdkResult};
pub use sdk::RustSdk;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of the first rust_sdk_init, kept for the life of the process.
pub static SYSTEM: OnceCell<Result<SdkSystem, SdkError>> = OnceCell::new();

#[derive(Debug)]
pub struct SdkSystem {
    pub config: SdkConfig,
    pub started_at: Instant,
}

impl SdkSystem {
    fn start() -> Result<SdkSystem, SdkError> {
        let config = match SdkConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                // no subscriber yet, so stderr is the only channel
                eprintln!("rust_sdk_init failed: {e}");
                return Err(e);
            }
        };
        logging::init_tracing(&config);
        tracing::info!(version = VERSION, "rust sdk initialized");
        Ok(SdkSystem { config, started_at: Instant::now() })
    }

    /// Time since the first successful rust_sdk_init.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Initialize on first call; later calls (from any thread) get the same
/// outcome without re-running anything.
pub fn ensure_initialized() -> Result<&'static SdkSystem, SdkError> {
    SYSTEM.get_or_init(SdkSystem::start).as_ref().map_err(Clone::clone)
}

/// The live system, if initialization already succeeded.
pub fn system() -> Option<&'static SdkSystem> {
    SYSTEM.get().and_then(|outcome| outcome.as_ref().ok())
}
