//! Command handlers for CLI subcommands.

use std::io::{self, IsTerminal};
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;
use tracing::info;

use gridmux_tmux::{Attached, TmuxError, TmuxOrchestrator, WindowSpec};

use crate::cli::Commands;
use crate::specfile;

/// Errors surfaced by the CLI layer.
#[derive(Error, Debug)]
pub enum CliError {
    /// A spec file could not be read.
    #[error("failed to read '{path}': {source}")]
    SpecFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// windows takes alternating name/command arguments.
    #[error("window pairs must be even: name1 cmd1 name2 cmd2 ...")]
    OddWindowPairs,

    #[error(transparent)]
    Tmux(#[from] TmuxError),
}

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Execute a CLI command.
pub fn execute(command: Commands) -> Result<()> {
    let tmux = TmuxOrchestrator::new()?;

    match command {
        Commands::Grid { session, commands } => hand_off(tmux.build_grid(&session, &commands)?),
        Commands::GridFile { session, file } => {
            let commands = specfile::read_commands(&file)?;
            hand_off(tmux.build_grid(&session, &commands)?)
        }
        Commands::Windows { session, pairs } => {
            let specs = pair_specs(&pairs)?;
            hand_off(tmux.build_windows(&session, &specs)?)
        }
        Commands::WindowsFile { session, file } => {
            let specs = specfile::read_windows(&file)?;
            hand_off(tmux.build_windows(&session, &specs)?)
        }
        Commands::Attach { session } => hand_off(tmux.attach(&session)?),
        Commands::Detach => {
            tmux.detach()?;
            Ok(())
        }
        Commands::Destroy { session } => {
            tmux.destroy(&session)?;
            Ok(())
        }
    }
}

/// Turn alternating name/command arguments into window specs.
fn pair_specs(pairs: &[String]) -> Result<Vec<WindowSpec>> {
    if pairs.len() % 2 != 0 {
        return Err(CliError::OddWindowPairs);
    }
    Ok(pairs
        .chunks(2)
        .map(|pair| WindowSpec::new(&pair[0], &pair[1]))
        .collect())
}

/// Hand the terminal over to tmux.
///
/// With a terminal on stdout this replaces the process image and does not
/// return; otherwise it logs how to connect and lets the process exit
/// normally with status 0.
fn hand_off(attached: Attached) -> Result<()> {
    if io::stdout().is_terminal() {
        let err = Command::new("tmux")
            .args(["attach-session", "-t", &attached.session])
            .exec();
        // exec only returns on error
        Err(CliError::Tmux(TmuxError::Io(err)))
    } else {
        info!(session = %attached.session, "use tmux attach to connect");
        Ok(())
    }
}
