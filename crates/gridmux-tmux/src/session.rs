//! Session-facing data types.

/// Window and pane numbering origins resolved from tmux options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseIndices {
    /// `base-index`: number of the first window.
    pub window: usize,
    /// `pane-base-index`: number of the first pane.
    pub pane: usize,
}

impl BaseIndices {
    /// Parse one `show-options -v` output value.
    ///
    /// tmux prints nothing when the option is unset; empty or non-numeric
    /// output means "fall back to the default", not an error.
    pub fn parse_value(raw: &[u8]) -> Option<usize> {
        String::from_utf8_lossy(raw).trim().parse().ok()
    }
}

/// A named window and the command to run in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub name: String,
    pub command: String,
}

impl WindowSpec {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

/// Successful end state of an orchestration: a session ready to take over
/// the terminal.
///
/// The core never replaces the process image itself; callers turn this
/// into `tmux attach-session` (or report the session name when stdout is
/// not a terminal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attached {
    pub session: String,
}

impl Attached {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
        }
    }
}

/// Outcome of `TmuxOrchestrator::ensure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ensure {
    /// No such session; the caller should build it.
    Fresh,
    /// The session already exists and wins over rebuilding.
    Existing(Attached),
}
