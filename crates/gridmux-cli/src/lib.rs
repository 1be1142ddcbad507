//! gridmux CLI library.
//!
//! Command-line front end for the gridmux tmux orchestrator.

pub mod cli;
pub mod commands;
pub mod specfile;
