//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gridmux - create tmux sessions with tiled pane grids or named windows
#[derive(Parser, Debug)]
#[command(name = "gridmux")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a session running each command in a tiled pane grid
    Grid {
        /// Tmux session name
        session: String,

        /// Commands to run, one per pane
        #[arg(required = true)]
        commands: Vec<String>,
    },

    /// Create a grid session from a file with one command per line
    GridFile {
        /// Tmux session name
        session: String,

        /// Path to the command file
        file: PathBuf,
    },

    /// Create a session with one named window per name/command pair
    Windows {
        /// Tmux session name
        session: String,

        /// Alternating name command pairs: name1 cmd1 name2 cmd2 ...
        #[arg(required = true)]
        pairs: Vec<String>,
    },

    /// Create a windowed session from a file with 'name command' lines
    WindowsFile {
        /// Tmux session name
        session: String,

        /// Path to the window-spec file
        file: PathBuf,
    },

    /// Attach to an existing session
    Attach {
        /// Tmux session name
        session: String,
    },

    /// Detach the current client from its tmux session
    Detach,

    /// Kill a session if it exists
    Destroy {
        /// Tmux session name
        session: String,
    },
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
