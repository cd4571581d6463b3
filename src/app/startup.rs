//! The startup sequence: announce, read `DATABASE_URL`, then fail.
//!
//! Every path ends in a failure. A missing URL is an expected error
//! (`StartupError::Config`), returned to the caller. A present URL leads to a
//! reference to a binding that was never established, which is a defect and
//! panics. `run` therefore returns `Result<Infallible, _>`.

use std::convert::Infallible;
use std::ffi::OsString;
use std::io::Write;

use tracing::error;

use crate::app::error::StartupError;
use crate::infra::config::{self, DATABASE_URL_VAR};

pub const STARTING_LINE: &str = "Starting application...";
pub const CONNECTING_PREFIX: &str = "Connecting to database:";

/// Name of the binding the sequence dereferences after announcing the
/// connection. Nothing ever defines it.
pub const UNBOUND_SYMBOL: &str = "db_handle";

pub struct StartupSequencer<W: Write> {
    out: W,
}

impl<W: Write> StartupSequencer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Runs the sequence. `lookup` resolves an environment variable by name;
    /// the binary passes `std::env::var_os`.
    pub fn run<F>(mut self, lookup: F) -> Result<Infallible, StartupError>
    where
        F: FnOnce(&str) -> Option<OsString>,
    {
        writeln!(self.out, "{}", STARTING_LINE)?;
        self.out.flush()?;

        let database_url = match config::database_url_from(lookup(DATABASE_URL_VAR)) {
            Ok(url) => url,
            Err(e) => {
                error!(variable = DATABASE_URL_VAR, "required configuration is missing");
                return Err(e.into());
            }
        };

        writeln!(self.out, "{} {}", CONNECTING_PREFIX, database_url)?;
        self.out.flush()?;

        error!(symbol = UNBOUND_SYMBOL, "referencing a binding that was never defined");
        resolve_symbol(UNBOUND_SYMBOL)
    }
}

/// Looks up a binding by name. No bindings exist, so this always panics.
pub fn resolve_symbol(name: &str) -> ! {
    panic!("{} is not defined", name)
}
