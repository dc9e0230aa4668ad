//! Command-line arguments for the dotgraph CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "dotgraph",
    version,
    about = "Parse DOT graph descriptions into attributed graphs."
)]
pub struct DotArgs {
    /// Print every token as it is recognised.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a .dot file, or every .dot file under a directory.
    Check {
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Parse a .dot file and print its vertices, edges and attributes.
    Inspect {
        #[arg(required = true)]
        file: PathBuf,
        /// Print the graph as JSON instead.
        #[arg(long)]
        json: bool,
    },
}
