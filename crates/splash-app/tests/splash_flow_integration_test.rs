//! End-to-end splash flow tests wiring the sequencer to scripted ports.
//!
//! Timers run under paused tokio time, so the full 13.5 second sequence
//! completes instantly and deterministically.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use splash_app::{ResolveLocation, SplashSequencer};
use splash_core::config::StageTimings;
use splash_core::geo::{GeoFix, ResolvedPlace};
use splash_core::ports::{GeocoderPort, LocationPort, NavigationPort, SplashEventPort};
use splash_core::splash::{LocationLabel, SplashState};

static TRACE_INIT: Once = Once::new();

fn init_tracing() {
    TRACE_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[derive(Default)]
struct RecordingDisplay {
    frames: tokio::sync::Mutex<Vec<(SplashState, LocationLabel)>>,
}

impl RecordingDisplay {
    async fn frames(&self) -> Vec<(SplashState, LocationLabel)> {
        self.frames.lock().await.clone()
    }

    async fn institution_label(&self) -> LocationLabel {
        self.frames()
            .await
            .into_iter()
            .find(|(state, _)| *state == SplashState::InstitutionLogo)
            .map(|(_, label)| label)
            .expect("institution logo screen was never emitted")
    }
}

#[async_trait]
impl SplashEventPort for RecordingDisplay {
    async fn emit_splash_changed(&self, state: SplashState, label: LocationLabel) {
        self.frames.lock().await.push((state, label));
    }
}

#[derive(Default)]
struct CountingNavigation {
    calls: AtomicUsize,
}

#[async_trait]
impl NavigationPort for CountingNavigation {
    async fn proceed_to_main(&self) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct ScriptedLocation {
    available: bool,
    permitted: bool,
    prompt_grants: bool,
    prompt_delay: Duration,
    fix: Option<GeoFix>,
    fix_delay: Duration,
    prompts: AtomicUsize,
}

impl Default for ScriptedLocation {
    fn default() -> Self {
        Self {
            available: true,
            permitted: false,
            prompt_grants: true,
            prompt_delay: Duration::from_millis(150),
            fix: Some(GeoFix {
                latitude: -6.2383,
                longitude: 106.9756,
            }),
            fix_delay: Duration::from_millis(400),
            prompts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl LocationPort for ScriptedLocation {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn has_permission(&self) -> bool {
        self.permitted
    }

    async fn request_permission(&self) -> bool {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        sleep(self.prompt_delay).await;
        self.prompt_grants
    }

    async fn request_fix(&self) -> anyhow::Result<Option<GeoFix>> {
        sleep(self.fix_delay).await;
        Ok(self.fix)
    }
}

struct TableGeocoder;

#[async_trait]
impl GeocoderPort for TableGeocoder {
    async fn reverse_geocode(&self, _fix: GeoFix) -> anyhow::Result<Option<ResolvedPlace>> {
        Ok(Some(ResolvedPlace {
            locality: Some("Bekasi".to_string()),
            sub_admin_area: None,
            admin_area: Some("Jawa Barat".to_string()),
            country: Some("Indonesia".to_string()),
        }))
    }
}

fn build(
    location: Arc<ScriptedLocation>,
    display: Arc<RecordingDisplay>,
    navigation: Arc<CountingNavigation>,
) -> SplashSequencer {
    let resolve = Arc::new(ResolveLocation::new(location, Arc::new(TableGeocoder)));
    SplashSequencer::new(StageTimings::default(), resolve, display, navigation)
}

#[tokio::test(start_paused = true)]
async fn full_flow_prompts_once_and_renders_the_resolved_location() {
    init_tracing();
    let location = Arc::new(ScriptedLocation::default());
    let display = Arc::new(RecordingDisplay::default());
    let navigation = Arc::new(CountingNavigation::default());

    build(location.clone(), display.clone(), navigation.clone())
        .run()
        .await
        .unwrap();

    let states: Vec<SplashState> = display
        .frames()
        .await
        .into_iter()
        .map(|(state, _)| state)
        .collect();
    assert_eq!(
        states,
        vec![
            SplashState::Logo,
            SplashState::FindingLocation,
            SplashState::InstitutionLogo,
            SplashState::Welcome,
            SplashState::UserInfo,
        ]
    );

    assert_eq!(location.prompts.load(Ordering::SeqCst), 1);
    assert_eq!(
        display.institution_label().await,
        LocationLabel::Resolved("Bekasi, Jawa Barat, Indonesia".to_string())
    );
    assert_eq!(navigation.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn denied_prompt_degrades_to_unknown_but_the_flow_still_finishes() {
    init_tracing();
    let location = Arc::new(ScriptedLocation {
        prompt_grants: false,
        ..ScriptedLocation::default()
    });
    let display = Arc::new(RecordingDisplay::default());
    let navigation = Arc::new(CountingNavigation::default());

    build(location.clone(), display.clone(), navigation.clone())
        .run()
        .await
        .unwrap();

    assert_eq!(display.institution_label().await, LocationLabel::Unknown);
    assert_eq!(navigation.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn unavailable_capability_never_shows_the_prompt() {
    init_tracing();
    let location = Arc::new(ScriptedLocation {
        available: false,
        ..ScriptedLocation::default()
    });
    let display = Arc::new(RecordingDisplay::default());
    let navigation = Arc::new(CountingNavigation::default());

    build(location.clone(), display.clone(), navigation.clone())
        .run()
        .await
        .unwrap();

    assert_eq!(location.prompts.load(Ordering::SeqCst), 0);
    assert_eq!(display.institution_label().await, LocationLabel::Unknown);
}
