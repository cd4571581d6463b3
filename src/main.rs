//! Binary entrypoint.
//!
//! Prints the startup line, reads `DATABASE_URL` from the process environment
//! (no `.env` file is consulted) and never exits cleanly:
//! a missing URL is reported as `Error: DATABASE_URL is not set` (status 1),
//! a present one ends in an unresolved-symbol panic (status 101).

use std::io;

use startup_sequencer::infra::logging;
use startup_sequencer::StartupSequencer;

fn main() -> anyhow::Result<()> {
    logging::init();

    let stdout = io::stdout();
    match StartupSequencer::new(stdout.lock()).run(|name| std::env::var_os(name))? {}
}
