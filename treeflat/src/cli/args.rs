//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::config::TreeFormat;

/// Convert between parent-pointer node lists and nested trees
#[derive(Parser, Debug)]
#[command(name = "treeflat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (default: ./.treeflat.toml if present)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Reject malformed input instead of degrading silently
    #[arg(long, global = true)]
    pub strict: bool,

    /// Tree output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<TreeFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a nested tree from a flat node list
    Build {
        /// JSON list of {"label", "parent"} objects, `-` for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
    },

    /// Flatten a nested tree into a node list (BFS order)
    Flatten {
        /// JSON tree of {"label", "children"} objects, `-` for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
    },

    /// Build, flatten again, and compare with the input
    Roundtrip {
        /// JSON list of {"label", "parent"} objects, `-` for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
    },

    /// Compare two flat node lists ignoring order
    Compare {
        #[arg(value_hint = ValueHint::FilePath)]
        a: PathBuf,
        #[arg(value_hint = ValueHint::FilePath)]
        b: PathBuf,
        /// Count duplicate entries instead of collapsing them
        #[arg(long)]
        multiset: bool,
    },

    /// Report duplicate labels, missing or multiple roots, orphans and cycles
    Validate {
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
    },

    /// Shared elements of two JSON arrays
    Intersect {
        #[arg(value_hint = ValueHint::FilePath)]
        a: PathBuf,
        #[arg(value_hint = ValueHint::FilePath)]
        b: PathBuf,
    },

    /// Run the built-in nine node example
    Demo,

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
