//! Splash display event port.

use async_trait::async_trait;

use crate::splash::{LocationLabel, SplashState};

/// Display collaborator notification channel.
///
/// The renderer receives a `(state, label)` pair whenever a new screen
/// becomes active; there is no other contract.
#[async_trait]
pub trait SplashEventPort: Send + Sync {
    async fn emit_splash_changed(&self, state: SplashState, label: LocationLabel);
}
