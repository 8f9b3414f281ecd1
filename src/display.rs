//! Terminal display adapter.
//!
//! Renders each splash screen as a framed block on stdout. Stands in for
//! the real full-screen renderer, which only ever sees `(state, label)`
//! notifications.

use async_trait::async_trait;
use tracing::debug;

use splash_core::ports::SplashEventPort;
use splash_core::splash::{stage_view, LocationLabel, SplashState};
use splash_core::UserProfile;

const FRAME_WIDTH: usize = 48;

pub struct TerminalDisplay {
    profile: UserProfile,
}

impl TerminalDisplay {
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }
}

#[async_trait]
impl SplashEventPort for TerminalDisplay {
    async fn emit_splash_changed(&self, state: SplashState, label: LocationLabel) {
        let Some(view) = stage_view(state, &label, &self.profile) else {
            return;
        };
        debug!(?state, "rendering splash screen");

        println!("{}", "=".repeat(FRAME_WIDTH));
        if !view.title.is_empty() {
            println!("{:^FRAME_WIDTH$}", view.title);
        }
        for line in &view.lines {
            println!("  {line}");
        }
        println!("{}", "=".repeat(FRAME_WIDTH));
    }
}
