//! Tmux session and grid orchestration.
//!
//! This crate drives an external tmux binary to build sessions:
//! - [`TmuxOrchestrator::build_grid`] tiles one pane per command in a
//!   balanced grid and sends each command to its pane
//! - [`TmuxOrchestrator::build_windows`] creates one named window per
//!   (name, command) pair
//! - sessions can be attached to, detached from, and destroyed
//! - a cooperative [`ShutdownFlag`] tears half-built sessions down cleanly
//!   on SIGINT/SIGTERM
//!
//! The orchestrator never attaches by itself: successful builds return
//! [`Attached`], and the caller decides how to hand the terminal over.
//!
//! # Example
//!
//! ```no_run
//! use gridmux_tmux::TmuxOrchestrator;
//!
//! let tmux = TmuxOrchestrator::new().expect("tmux not found");
//!
//! let commands = vec!["htop".to_string(), "journalctl -f".to_string()];
//! let attached = tmux.build_grid("monitor", &commands).unwrap();
//! println!("session ready: {}", attached.session);
//! ```

pub mod error;
pub mod invoker;
pub mod layout;
pub mod orchestrator;
pub mod session;
pub mod shutdown;

pub use error::{Result, TmuxError};
pub use invoker::{SystemTmux, TmuxInvoker, TmuxOutput};
pub use layout::GridSize;
pub use orchestrator::TmuxOrchestrator;
pub use session::{Attached, BaseIndices, Ensure, WindowSpec};
pub use shutdown::ShutdownFlag;
