//! Primary provider health with timed, optimistic recovery.
//!
//! # State Machine
//!
//! ```text
//! Healthy --[primary lookup fails]--> Down (recovery timer armed)
//! Down --[cooldown elapsed]--> Healthy
//! ```
//!
//! Recovery is unconditional: no probe request is made, the primary is
//! simply tried first again once the cooldown has passed. Only the
//! Healthy → Down transition arms a timer, so at most one is outstanding.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Health of the primary provider, owned by the service.
#[derive(Debug)]
pub struct ProviderHealth {
    primary_down: Arc<AtomicBool>,
    cooldown: Duration,
    /// The armed recovery task, if any.
    recovery: Mutex<Option<JoinHandle<()>>>,
    cancellation: CancellationToken,
}

impl ProviderHealth {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            primary_down: Arc::new(AtomicBool::new(false)),
            cooldown,
            recovery: Mutex::new(None),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn is_primary_down(&self) -> bool {
        self.primary_down.load(Ordering::Acquire)
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Record a primary failure.
    ///
    /// Flips the flag and arms the recovery timer when the primary was
    /// healthy. Returns `true` if this call performed the transition.
    ///
    /// Needs a tokio runtime to schedule recovery; without one, or after
    /// [`shutdown`](Self::shutdown), the primary stays marked healthy.
    pub fn mark_primary_down(&self) -> bool {
        if self.cancellation.is_cancelled() {
            return false;
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No tokio runtime available to schedule primary recovery");
            return false;
        };

        if self
            .primary_down
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }

        info!(
            cooldown_secs = self.cooldown.as_secs(),
            "Primary provider marked down, using secondary until recovery"
        );

        let flag = Arc::clone(&self.primary_down);
        let token = self.cancellation.child_token();
        let cooldown = self.cooldown;
        let task = runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(cooldown) => {
                    flag.store(false, Ordering::Release);
                    info!("Primary provider recovery cooldown elapsed");
                }
            }
        });

        *self.recovery.lock() = Some(task);
        true
    }

    /// Cancel any pending recovery timer.
    pub fn shutdown(&self) {
        self.cancellation.cancel();
        if let Some(task) = self.recovery.lock().take() {
            task.abort();
        }
    }
}

impl Drop for ProviderHealth {
    fn drop(&mut self) {
        self.shutdown();
    }
}
