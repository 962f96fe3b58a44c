use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::reference::Category;

#[derive(Parser, Debug)]
#[command(name = "uwp-decoder")]
#[command(version, about = "Decode Traveller Universal World Profile (UWP) strings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Reference data JSON file (default: user config, then built-in tables)
    #[arg(short, long, global = true)]
    pub reference: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv, -vvvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode UWP strings (reads one per line from stdin if none given)
    Parse {
        /// UWP strings, e.g. "A865AB7-C N A Ag In (Major Trade Hub)"
        uwp: Vec<String>,

        /// Print JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// Check UWP strings without decoding them
    Validate {
        /// UWP strings to check (reads stdin if none given)
        uwp: Vec<String>,
    },

    /// List reference categories, or the codes in one category
    Tables {
        /// Category to show (e.g. starport, trade_codes)
        category: Option<Category>,
    },

    /// Open the interactive terminal form
    Interactive,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Log filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
    }
}
