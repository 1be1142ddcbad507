//! Cooperative shutdown signaling.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use signal_hook::consts::{SIGINT, SIGTERM};
use tracing::debug;

/// Level-triggered shutdown flag shared with the signal handler.
///
/// Once set the flag stays set; orchestration polls it at the top of each
/// loop iteration and never clears it.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag {
    flag: Arc<AtomicBool>,
}

static PROCESS_FLAG: OnceLock<ShutdownFlag> = OnceLock::new();

impl ShutdownFlag {
    /// A fresh, unarmed flag. Tests inject these to drive interruption.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide flag, armed on SIGINT and SIGTERM.
    ///
    /// The first call registers the signal handlers; later calls return
    /// the same flag without re-registering.
    pub fn install() -> io::Result<Self> {
        if let Some(flag) = PROCESS_FLAG.get() {
            return Ok(flag.clone());
        }
        let flag = Self::new();
        for sig in [SIGINT, SIGTERM] {
            signal_hook::flag::register(sig, Arc::clone(&flag.flag))?;
        }
        debug!("shutdown signal handlers installed");
        Ok(PROCESS_FLAG.get_or_init(|| flag).clone())
    }

    pub fn set(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
