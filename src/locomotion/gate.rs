//! One-shot pause latch.
//!
//! A [`PauseGate`] starts closed. The scene loader keeps one clone and opens it
//! when loading finished; every controller of the scene keeps another clone
//! and does nothing while the gate is closed. Opening is irreversible for the
//! lifetime of the gate, so a new scene creates a new gate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};

/// Shared handle to a pause latch. Clones observe the same latch.
#[derive(Debug, Clone, Default)]
pub struct PauseGate {
    open: Arc<AtomicBool>,
}

impl PauseGate {
    /// Create a closed gate.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    pub fn is_paused(&self) -> bool {
        !self.is_open()
    }

    /// Open the gate.
    ///
    /// Returns `true` only for the call that actually opened it. Any later
    /// call is ignored and returns `false`.
    pub fn open(&self) -> bool {
        let opened = self
            .open
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if opened {
            info!("Pause gate opened");
        } else {
            warn!("Pause gate already open, ignoring repeated load-finished signal");
        }
        opened
    }
}
