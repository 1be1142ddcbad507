//! Tmux orchestrator: session lifecycle plus grid and window builders.

use std::env;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::invoker::{SystemTmux, TmuxInvoker};
use crate::layout::GridSize;
use crate::session::{Attached, BaseIndices, Ensure, WindowSpec};
use crate::shutdown::ShutdownFlag;
use crate::{Result, TmuxError};

/// Delay between consecutive send-keys so rapid sends do not race the tmux
/// input buffer.
const SEND_DELAY: Duration = Duration::from_millis(50);

/// Fixed prefix for the window created by grid sessions; embeds the
/// orchestrator identity in the tmux UI without colliding with user window
/// names.
const GRID_WINDOW_PREFIX: &str = "grid-";

/// Drives tmux to build, attach to, and destroy sessions.
pub struct TmuxOrchestrator {
    invoker: Box<dyn TmuxInvoker>,
    shutdown: ShutdownFlag,
    send_delay: Duration,
}

impl TmuxOrchestrator {
    /// Create an orchestrator backed by the tmux binary in PATH, with the
    /// process-wide shutdown flag armed.
    ///
    /// # Errors
    ///
    /// Returns `TmuxError::ToolMissing` if tmux is not installed.
    pub fn new() -> Result<Self> {
        let invoker = SystemTmux::locate()?;
        let shutdown = ShutdownFlag::install()?;
        Ok(Self::with_invoker(Box::new(invoker), shutdown))
    }

    /// Create an orchestrator with a provided invoker and shutdown flag.
    pub fn with_invoker(invoker: Box<dyn TmuxInvoker>, shutdown: ShutdownFlag) -> Self {
        Self {
            invoker,
            shutdown,
            send_delay: SEND_DELAY,
        }
    }

    // ==================== Probes ====================

    /// Check whether a session exists.
    pub fn session_exists(&self, name: &str) -> Result<bool> {
        let out = self.invoker.run(&["has-session", "-t", name])?;
        Ok(out.success())
    }

    /// Resolve the window and pane numbering origins.
    ///
    /// Reads the global option, then the session-scoped override when a
    /// session is given; empty or unparseable output falls back to 0.
    pub fn resolve_indices(&self, session: Option<&str>) -> Result<BaseIndices> {
        Ok(BaseIndices {
            window: self.resolve_option("base-index", session)?,
            pane: self.resolve_option("pane-base-index", session)?,
        })
    }

    fn resolve_option(&self, option: &str, session: Option<&str>) -> Result<usize> {
        let global = self.invoker.run(&["show-options", "-gqv", option])?;
        let mut value = BaseIndices::parse_value(&global.stdout);
        if let Some(name) = session {
            let scoped = self
                .invoker
                .run(&["show-options", "-t", name, "-qv", option])?;
            if let Some(v) = BaseIndices::parse_value(&scoped.stdout) {
                value = Some(v);
            }
        }
        Ok(value.unwrap_or(0))
    }

    // ==================== Session lifecycle ====================

    /// Decide whether the caller should build a fresh session.
    ///
    /// An existing session is destroyed first when `force` is set;
    /// otherwise it wins and the caller should attach instead.
    pub fn ensure(&self, name: &str, force: bool) -> Result<Ensure> {
        if name.is_empty() {
            return Err(TmuxError::EmptySessionName);
        }
        if !self.session_exists(name)? {
            return Ok(Ensure::Fresh);
        }
        if force {
            info!(session = %name, "session exists, recreating");
            self.run_checked(&["kill-session", "-t", name])?;
            return Ok(Ensure::Fresh);
        }
        info!(session = %name, "session already exists, attaching");
        Ok(Ensure::Existing(Attached::new(name)))
    }

    /// Prepare to attach to an existing session.
    ///
    /// # Errors
    ///
    /// Returns `TmuxError::SessionNotFound` if the session does not exist.
    pub fn attach(&self, name: &str) -> Result<Attached> {
        if name.is_empty() {
            return Err(TmuxError::EmptySessionName);
        }
        if !self.session_exists(name)? {
            return Err(TmuxError::SessionNotFound(name.to_string()));
        }
        info!(session = %name, "attaching to session");
        Ok(Attached::new(name))
    }

    /// Detach the current client from its session.
    ///
    /// # Errors
    ///
    /// Returns `TmuxError::NotInSession` when not running inside tmux.
    pub fn detach(&self) -> Result<()> {
        if env::var_os("TMUX").is_none() {
            return Err(TmuxError::NotInSession);
        }
        info!("detaching from tmux session");
        self.run_checked(&["detach-client"])?;
        Ok(())
    }

    /// Destroy a session; absence is not an error.
    pub fn destroy(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(TmuxError::EmptySessionName);
        }
        if !self.session_exists(name)? {
            warn!(session = %name, "session does not exist");
            return Ok(());
        }
        info!(session = %name, "destroying session");
        self.run_checked(&["kill-session", "-t", name])?;
        info!(session = %name, "session destroyed");
        Ok(())
    }

    // ==================== Builders ====================

    /// Build a session running `commands` in a tiled pane grid, one pane
    /// per command, filled left to right, top to bottom.
    ///
    /// An existing session named `name` wins: the commands are ignored and
    /// the session is handed back for attaching as-is.
    pub fn build_grid(&self, name: &str, commands: &[String]) -> Result<Attached> {
        if name.is_empty() {
            return Err(TmuxError::EmptySessionName);
        }
        if commands.is_empty() {
            return Err(TmuxError::EmptyCommandList);
        }
        if let Ensure::Existing(attached) = self.ensure(name, false)? {
            return Ok(attached);
        }

        // Advisory: the pane count is always commands.len(), not rows*cols.
        let grid = GridSize::for_panes(commands.len());
        info!(
            session = %name,
            panes = commands.len(),
            grid = %grid,
            "creating tmux session"
        );

        self.finish_build(name, self.assemble_grid(name, commands))
    }

    fn assemble_grid(&self, name: &str, commands: &[String]) -> Result<()> {
        let window = format!("{GRID_WINDOW_PREFIX}{name}");
        self.run_checked(&["new-session", "-d", "-s", name, "-n", &window])?;

        let target = format!("{name}:{window}");
        for _ in 1..commands.len() {
            self.checkpoint()?;
            self.run_checked(&["split-window", "-t", &target])?;
            self.run_checked(&["select-layout", "-t", &target, "tiled"])?;
        }

        let indices = self.resolve_indices(Some(name))?;
        for (i, command) in commands.iter().enumerate() {
            self.checkpoint()?;
            let pane = format!("{target}.{}", indices.pane + i);
            self.run_checked(&["send-keys", "-t", &pane, command, "C-m"])?;
            thread::sleep(self.send_delay);
        }
        Ok(())
    }

    /// Build a session with one named window per spec.
    ///
    /// The first spec names the window created with the session; each
    /// following spec adds one window at the next absolute index.
    pub fn build_windows(&self, name: &str, specs: &[WindowSpec]) -> Result<Attached> {
        if name.is_empty() {
            return Err(TmuxError::EmptySessionName);
        }
        if specs.is_empty() {
            return Err(TmuxError::EmptyWindowSpecs);
        }
        if let Ensure::Existing(attached) = self.ensure(name, false)? {
            return Ok(attached);
        }

        let indices = self.resolve_indices(None)?;
        info!(session = %name, windows = specs.len(), "creating tmux session");

        self.finish_build(name, self.assemble_windows(name, indices, specs))
    }

    fn assemble_windows(
        &self,
        name: &str,
        indices: BaseIndices,
        specs: &[WindowSpec],
    ) -> Result<()> {
        self.run_checked(&["new-session", "-d", "-s", name, "-n", &specs[0].name])?;
        let first = format!("{name}:{}", indices.window);
        self.run_checked(&["send-keys", "-t", &first, &specs[0].command, "C-m"])?;

        for (i, spec) in specs.iter().enumerate().skip(1) {
            self.checkpoint()?;
            let target = format!("{name}:{}", indices.window + i);
            self.run_checked(&["new-window", "-t", &target, "-n", &spec.name])?;
            self.run_checked(&["send-keys", "-t", &target, &spec.command, "C-m"])?;
        }
        Ok(())
    }

    /// Map a build result to its final outcome, cleaning up the partially
    /// built session exactly once on interruption.
    ///
    /// A step failure with the shutdown flag clear propagates untouched and
    /// leaves the session behind for inspection.
    fn finish_build(&self, name: &str, built: Result<()>) -> Result<Attached> {
        match built {
            Ok(()) => Ok(Attached::new(name)),
            Err(e) => {
                if matches!(e, TmuxError::Interrupted) || self.shutdown.is_set() {
                    info!(session = %name, "shutdown requested, cleaning up session");
                    self.destroy_quiet(name);
                    Err(TmuxError::Interrupted)
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Fail with `Interrupted` once the shutdown flag is set.
    fn checkpoint(&self) -> Result<()> {
        if self.shutdown.is_set() {
            Err(TmuxError::Interrupted)
        } else {
            Ok(())
        }
    }

    /// Best-effort kill-session; cleanup errors are logged, not escalated.
    fn destroy_quiet(&self, name: &str) {
        if let Err(e) = self.invoker.run(&["kill-session", "-t", name]) {
            warn!(session = %name, error = %e, "session cleanup failed");
        }
    }

    /// Run a tmux command and fail on nonzero exit.
    fn run_checked(&self, args: &[&str]) -> Result<String> {
        let out = self.invoker.run(args)?;
        if out.success() {
            Ok(out.stdout_text())
        } else {
            Err(TmuxError::CommandFailed {
                args: args.iter().map(|s| s.to_string()).collect(),
                code: out.code,
                stderr: out.stderr_text(),
            })
        }
    }
}
