//! Command-line interface definitions for blockdoc

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the blockdoc application
#[derive(Parser)]
#[command(name = "blockdoc")]
#[command(version)]
#[command(about = "Classify, render and edit stored rich-text content", long_about = None)]
pub struct Cli {
    /// Enable info-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for blockdoc
#[derive(Subcommand)]
pub enum Commands {
    /// Print the detected content kind (empty, html, structured, plain-text)
    Detect {
        /// Content file, or `-` for stdin
        input: PathBuf,
    },

    /// Render content as display HTML
    Render {
        /// Content file, or `-` for stdin
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the fragment in a complete HTML page
        #[arg(long)]
        standalone: bool,

        /// Insert block text verbatim instead of escaping it
        #[arg(long)]
        no_escape: bool,

        /// Path to a blockdoc.toml configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the flat editable text of the content
    EditText {
        /// Content file, or `-` for stdin
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Store edited text back in the shape of the original content
    Commit {
        /// Original content file
        original: PathBuf,

        /// Edited text file, or `-` for stdin
        edited: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify every file under a directory and print counts
    Scan {
        /// Directory of stored content files
        #[arg(value_name = "PATH", default_value = ".")]
        dir: PathBuf,
    },
}
