//! Subprocess invocation of the tmux binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, trace};

use crate::{Result, TmuxError};

/// Captured result of a single tmux invocation.
#[derive(Debug, Clone)]
pub struct TmuxOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Process exit code; -1 if the child was killed by a signal.
    pub code: i32,
}

impl TmuxOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Stdout as trimmed UTF-8, lossily decoded.
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).trim().to_string()
    }

    /// Stderr as trimmed UTF-8, lossily decoded.
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }
}

/// A source of tmux command executions.
///
/// The orchestrator talks to tmux exclusively through this trait, so tests
/// can substitute a recording fake for the real binary.
pub trait TmuxInvoker {
    /// Run one tmux subcommand, capturing output and exit status.
    ///
    /// Returns `Ok` regardless of the child's exit code; failing on a
    /// nonzero code is the caller's decision.
    fn run(&self, args: &[&str]) -> Result<TmuxOutput>;
}

/// Invoker backed by the real tmux binary.
#[derive(Debug)]
pub struct SystemTmux {
    path: PathBuf,
}

impl SystemTmux {
    /// Locate tmux in PATH.
    ///
    /// # Errors
    ///
    /// Returns `TmuxError::ToolMissing` if the binary cannot be found.
    pub fn locate() -> Result<Self> {
        let path = which::which("tmux").map_err(|_| TmuxError::ToolMissing)?;
        debug!(path = %path.display(), "tmux found");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TmuxInvoker for SystemTmux {
    fn run(&self, args: &[&str]) -> Result<TmuxOutput> {
        trace!(args = ?args, "running tmux command");
        let output = Command::new(&self.path).args(args).output()?;
        trace!(
            status = %output.status,
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "tmux command completed"
        );
        Ok(TmuxOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            code: output.status.code().unwrap_or(-1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_reports_missing_or_path() {
        // Either succeeds (tmux installed) or reports ToolMissing.
        match SystemTmux::locate() {
            Ok(tmux) => assert!(!tmux.path().as_os_str().is_empty()),
            Err(e) => assert!(matches!(e, TmuxError::ToolMissing)),
        }
    }

    #[test]
    fn output_text_trims_and_decodes() {
        let out = TmuxOutput {
            stdout: b" 1\n".to_vec(),
            stderr: b"no session\n".to_vec(),
            code: 1,
        };
        assert!(!out.success());
        assert_eq!(out.stdout_text(), "1");
        assert_eq!(out.stderr_text(), "no session");
    }
}
