//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// twig - Visitor-driven rewriting for JSON syntax forests
#[derive(Parser)]
#[command(name = "twig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run rewriting passes over a forest
    Run {
        /// Forest file (JSON array of slots)
        input: PathBuf,

        /// Pass to run, in order: remove:KIND, prune:KIND, rename:OLD=NEW, unwrap:KIND, count
        #[arg(short, long = "pass")]
        passes: Vec<String>,

        /// Maximum node nesting depth
        #[arg(long)]
        max_depth: Option<usize>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Log every enter/leave event
        #[arg(long)]
        trace: bool,
    },

    /// Validate a forest and report node counts
    Check {
        /// Forest file (JSON array of slots)
        input: PathBuf,
    },
}
