//! Terminal navigation adapter.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use splash_core::ports::NavigationPort;

/// Hand-off target for demo runs: announces the switch and returns.
pub struct TerminalNavigation;

#[async_trait]
impl NavigationPort for TerminalNavigation {
    async fn proceed_to_main(&self) -> Result<()> {
        info!("navigating to main application");
        println!(">> main application <<");
        Ok(())
    }
}
