use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for sheetlens
#[derive(Parser)]
#[command(
    name = "sheetlens",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze categorized spreadsheet rows from Google Sheets or CSV, with optional LLM annotation",
    long_about = None
)]
pub struct Cli {
    /// Verbose diagnostics on errors and config loading
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the analysis pipeline over a row source
    #[command(group(
        ArgGroup::new("source")
            .args(["csv", "api"])
            .required(true)
            .multiple(false)
    ))]
    Analyze {
        /// Read rows from a local CSV file
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,

        /// Read rows from the configured Google Sheet
        #[arg(long)]
        api: bool,

        /// Annotate eligible rows with the language model
        #[arg(long)]
        llm: bool,

        /// Dump raw rows before analysis
        #[arg(long)]
        raw: bool,
    },

    /// Test external connections without processing any rows
    Test {
        /// Test the Google Sheets connection
        #[arg(long)]
        api: bool,

        /// Test the LLM endpoint
        #[arg(long)]
        llm: bool,
    },

    /// Inspect the resolved configuration
    Config {
        #[arg(long = "print", help = "Print the resolved configuration (secrets masked)")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for problems")]
        check: bool,
    },
}
