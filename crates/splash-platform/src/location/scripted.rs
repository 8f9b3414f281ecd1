//! Scripted location service.
//!
//! Stands in for a fused-location client in environments without one:
//! availability, the permission gate, and the single fix all come from
//! configuration. The permission prompt outcome is scripted too, with a
//! short suspension so the flow behaves like a real dialog round-trip.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, warn};

use splash_core::config::LocationConfig;
use splash_core::geo::GeoFix;
use splash_core::ports::LocationPort;

/// Simulated dialog round-trip latency.
const PROMPT_LATENCY: Duration = Duration::from_millis(150);

pub struct ScriptedLocationService {
    config: LocationConfig,
    /// Session-scoped grant; seeded from config, flipped by the prompt.
    permission_granted: AtomicBool,
    prompted: AtomicBool,
    /// Single-shot guard: the fix is handed out once per session.
    fix_taken: AtomicBool,
}

impl ScriptedLocationService {
    pub fn new(config: LocationConfig) -> Self {
        let granted = config.permission_granted;
        Self {
            config,
            permission_granted: AtomicBool::new(granted),
            prompted: AtomicBool::new(false),
            fix_taken: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl LocationPort for ScriptedLocationService {
    fn is_available(&self) -> bool {
        self.config.available
    }

    async fn has_permission(&self) -> bool {
        self.permission_granted.load(Ordering::SeqCst)
    }

    async fn request_permission(&self) -> bool {
        if self.prompted.swap(true, Ordering::SeqCst) {
            warn!("permission prompt requested more than once in a session");
            return self.permission_granted.load(Ordering::SeqCst);
        }

        sleep(PROMPT_LATENCY).await;
        let granted = self.config.prompt_grants;
        self.permission_granted.store(granted, Ordering::SeqCst);
        debug!(granted, "scripted permission prompt answered");
        granted
    }

    async fn request_fix(&self) -> Result<Option<GeoFix>> {
        if self.fix_taken.swap(true, Ordering::SeqCst) {
            // Single-shot semantics: the listener detached after the first
            // result, so a second request yields nothing.
            return Ok(None);
        }

        if self.config.fix_delay_ms > 0 {
            sleep(Duration::from_millis(self.config.fix_delay_ms)).await;
        }
        Ok(self.config.fix)
    }
}
