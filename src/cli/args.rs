//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Morse code decoder backed by a binary code tree
#[derive(Parser, Debug)]
#[command(name = "morsetree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file (overrides global config)
    #[arg(short, long, global = true, env = "MORSETREE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode Morse messages (arguments, file, or stdin; one message per line)
    Decode {
        /// Messages to decode, e.g. ".... ..  - .... . .-. .#"
        messages: Vec<String>,

        /// Read messages from file instead of stdin
        #[arg(short, long, value_hint = ValueHint::FilePath, conflicts_with = "messages")]
        file: Option<PathBuf>,

        /// Exit with an error code if any message cannot be decoded
        #[arg(long)]
        strict: bool,
    },

    /// Show the code tree
    Tree,

    /// List letters with their codes
    Table,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show global config file path
    Path,
    /// Print a config template
    Template,
}
