use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

mod error;
mod input;
mod shell;

pub use error::*;
pub use input::*;
pub use shell::*;

/// Monthly Money Tracker - record income and expenses, review them by month
#[derive(Parser, Debug)]
#[command(name = "money-tracker")]
#[command(about = "An interactive, in-memory monthly money tracker")]
#[command(version)]
pub struct Cli {
    /// Print diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn init_logging(&self) {
        let level = if self.verbose { Level::DEBUG } else { Level::WARN };
        // Menu transcript owns stdout; diagnostics go to stderr.
        // try_init only fails if a global subscriber is already installed,
        // in which case that one keeps receiving events.
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Run an interactive session on stdin/stdout.
    pub fn run(self) -> Result<()> {
        self.init_logging();
        tracing::debug!("starting session");

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut shell = Shell::new(stdin.lock(), stdout.lock());
        shell.run()?;

        tracing::debug!(
            transactions = shell.ledger().len(),
            "session ended, discarding ledger"
        );
        Ok(())
    }
}
