//! Splash sequencer.
//!
//! This module coordinates the splash state machine and side effects:
//! stage timers, the concurrent location resolution, and the final
//! hand-off to the main application.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::time::sleep;
use tracing::{debug, info, info_span, warn, Instrument};

use splash_core::config::StageTimings;
use splash_core::ports::{NavigationPort, SplashEventPort};
use splash_core::splash::{SplashAction, SplashEvent, SplashState, SplashStateMachine};

use crate::usecases::resolve_location::ResolveLocation;
use crate::usecases::splash::context::SplashContext;

/// Errors produced by the splash sequencer.
#[derive(Debug, thiserror::Error)]
pub enum SplashRunError {
    #[error("hand-off to main application failed: {0}")]
    HandOff(#[source] anyhow::Error),
}

/// Orchestrator that drives splash state and side effects.
pub struct SplashSequencer {
    context: Arc<SplashContext>,
    timings: StageTimings,

    // 能力型 use cases (依赖注入)
    resolve_location: Arc<ResolveLocation>,
    splash_event_port: Arc<dyn SplashEventPort>,
    navigation: Arc<dyn NavigationPort>,
    proceeded: AtomicBool,
}

impl SplashSequencer {
    pub fn new(
        timings: StageTimings,
        resolve_location: Arc<ResolveLocation>,
        splash_event_port: Arc<dyn SplashEventPort>,
        navigation: Arc<dyn NavigationPort>,
    ) -> Self {
        Self {
            context: SplashContext::default().arc(),
            timings,
            resolve_location,
            splash_event_port,
            navigation,
            proceeded: AtomicBool::new(false),
        }
    }

    /// Run the sequence to completion.
    ///
    /// Consumes the sequencer: once the hand-off has fired there is nothing
    /// left to drive and all state is released.
    pub async fn run(self) -> Result<(), SplashRunError> {
        let span = info_span!("usecase.splash_sequencer.run");
        async {
            let mut current = self.context.get_state().await;
            self.emit(current).await;

            while let Some(dwell) = self.timings.dwell(current) {
                sleep(dwell).await;

                let (next, actions) =
                    SplashStateMachine::transition(current, SplashEvent::StageTimedOut);
                info!(from = ?current, to = ?next, "splash state transition");
                self.execute_actions(actions).await?;
                self.context.set_state(next).await;
                if !next.is_terminal() {
                    self.emit(next).await;
                }
                current = next;
            }

            Ok(())
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<SplashAction>) -> Result<(), SplashRunError> {
        for action in actions {
            debug!(?action, "splash executing action");
            match action {
                SplashAction::ResolveLocation => self.spawn_location_resolution(),
                SplashAction::ProceedToMain => self.proceed_to_main().await?,
            }
        }
        Ok(())
    }

    /// Kick off the lookup without blocking the stage timers.
    ///
    /// The task writes the label through the write-once gate; a result
    /// landing after InstitutionLogo has already rendered stays invisible
    /// for the rest of the session, because the display only reads the
    /// label at state emissions.
    fn spawn_location_resolution(&self) {
        let resolve_location = Arc::clone(&self.resolve_location);
        let context = Arc::clone(&self.context);

        tokio::spawn(async move {
            let label = resolve_location.execute().await;
            if context.resolve_label_once(label).await {
                debug!("location label stored for this session");
            }
        });
    }

    async fn proceed_to_main(&self) -> Result<(), SplashRunError> {
        if self.proceeded.swap(true, Ordering::SeqCst) {
            warn!("duplicate hand-off suppressed");
            return Ok(());
        }

        info!("splash sequence finished, handing off to main application");
        self.navigation
            .proceed_to_main()
            .await
            .map_err(SplashRunError::HandOff)
    }

    async fn emit(&self, state: SplashState) {
        let label = self.context.get_label().await;
        self.splash_event_port.emit_splash_changed(state, label).await;
    }
}
