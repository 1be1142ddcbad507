//! Error types for tmux orchestration.

use thiserror::Error;

/// Errors that can occur while driving tmux.
#[derive(Error, Debug)]
pub enum TmuxError {
    /// tmux not found in PATH.
    #[error("tmux is not installed or not in PATH")]
    ToolMissing,

    /// Session name was empty.
    #[error("session name cannot be empty")]
    EmptySessionName,

    /// No commands supplied for a grid session.
    #[error("at least one command is required")]
    EmptyCommandList,

    /// No window specs supplied for a windowed session.
    #[error("at least one window specification is required")]
    EmptyWindowSpecs,

    /// Session not found.
    #[error("session '{0}' does not exist")]
    SessionNotFound(String),

    /// Detach requested outside a tmux session.
    #[error("not currently in a tmux session")]
    NotInSession,

    /// A required tmux command exited nonzero.
    #[error("tmux {} failed with code {code}: {stderr}", .args.join(" "))]
    CommandFailed {
        args: Vec<String>,
        code: i32,
        stderr: String,
    },

    /// Shutdown signal observed mid-build.
    #[error("interrupted by shutdown signal")]
    Interrupted,

    /// I/O error spawning or waiting on tmux.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tmux operations.
pub type Result<T> = std::result::Result<T, TmuxError>;
