//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "rcql")]
#[command(author, version, about = "RCQL Runner - Parse and display RCQL task blocks", long_about = None)]
pub struct Args {
    /// Path to your RCQL file (use - for stdin)
    pub file: PathBuf,

    /// Output format as JSON
    #[arg(long, env = "RCQL_JSON")]
    pub json: bool,

    /// Verbose output (log dropped lines and a summary to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "rcql=debug"
        } else {
            "warn"
        }
    }
}
