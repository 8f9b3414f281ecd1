//! Host navigation port.

use anyhow::Result;
use async_trait::async_trait;

/// Host navigation collaborator.
///
/// `proceed_to_main` is a fire-and-forget hand-off, invoked exactly once
/// per sequence run; afterwards the sequencer releases all its state.
#[async_trait]
pub trait NavigationPort: Send + Sync {
    async fn proceed_to_main(&self) -> Result<()>;
}
