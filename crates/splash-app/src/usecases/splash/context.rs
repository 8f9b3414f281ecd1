//! Shared splash context.

use std::sync::Arc;

use tokio::sync::Mutex;

use splash_core::splash::{LocationLabel, SplashState};

/// Shared splash context holding the active state and the session label.
///
/// The label is write-once: [`SplashContext::resolve_label_once`] upgrades
/// `Unknown` to a resolved value at most once and ignores every later
/// attempt, so a late or duplicate completion can never rewrite it.
#[derive(Clone)]
pub struct SplashContext {
    /// Current splash state.
    state: Arc<Mutex<SplashState>>,
    /// Session location label, written by at most one completion path.
    label: Arc<Mutex<LocationLabel>>,
}

impl SplashContext {
    /// Creates a new SplashContext with the given initial state.
    pub fn new(initial_state: SplashState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            label: Arc::new(Mutex::new(LocationLabel::Unknown)),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn get_state(&self) -> SplashState {
        *self.state.lock().await
    }

    pub async fn set_state(&self, state: SplashState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }

    pub async fn get_label(&self) -> LocationLabel {
        self.label.lock().await.clone()
    }

    /// Store a resolved label unless one was already written.
    ///
    /// Returns whether the write took effect. `Unknown` never overwrites
    /// anything; it is the initial value and stays in place on failure.
    pub async fn resolve_label_once(&self, label: LocationLabel) -> bool {
        if !label.is_resolved() {
            return false;
        }
        let mut guard = self.label.lock().await;
        if guard.is_resolved() {
            return false;
        }
        *guard = label;
        true
    }
}

impl Default for SplashContext {
    fn default() -> Self {
        Self::new(SplashState::Logo)
    }
}
