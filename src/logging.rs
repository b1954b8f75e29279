// src/logging.rs
//
// Tracing setup. Installed at most once per process, on the first
// rust_sdk_init. A host that already installed a global subscriber keeps
// it; we only log that ours was skipped.

use std::fs::File;
use std::sync::{Arc, Once};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::SdkConfig;

static TRACING_INIT: Once = Once::new();

pub fn init_tracing(config: &SdkConfig) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_new(&config.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

        let mut file_error = None;
        let file_layer = config.log_file.as_ref().and_then(|path| match File::create(path) {
            Ok(file) => Some(
                fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false),
            ),
            Err(e) => {
                file_error = Some(format!("{}: {e}", path.display()));
                None
            }
        });

        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_thread_ids(true)
            .with_ansi(config.log_ansi);

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(stderr_layer)
            .try_init()
            .is_ok();

        if let Some(err) = file_error {
            tracing::warn!("could not open log file, logging to stderr only: {err}");
        }
        if installed {
            tracing::debug!(filter = %config.log_filter, "tracing initialized");
        } else {
            tracing::debug!("global subscriber already set, keeping host's");
        }
    });
}
