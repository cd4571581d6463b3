//! Diagnostic logging.
//!
//! Diagnostics go to stderr so stdout carries only the progress lines.
//! Level is fixed at INFO; no timestamps and no colour codes are printed,
//! so repeated runs are byte-identical.

use tracing::Level;

pub fn init() {
    // try_init: an already-installed subscriber is left in place.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .with_target(false)
        .without_time()
        .try_init();
}
