//! Per-call context passed alongside every record.
//!
//! A [`Context`] carries a cancellation flag shared by all of its clones.
//! Filters and the filtering sink never interpret it; they hand it on to the
//! sink that actually performs output.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
}

impl Context {
    /// A fresh, uncancelled context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Mark this context and all of its clones as cancelled.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
