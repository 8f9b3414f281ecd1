//! Per-stage display view-models.
//!
//! The display collaborator renders whatever [`StageView`] describes; the
//! texts mirror the original onboarding screens.

use serde::Serialize;

use crate::profile::UserProfile;
use crate::splash::{LocationLabel, SplashState};

/// Branded application title shown on the first screen.
const APP_TITLE: &str = "HR ONLINE";
/// Caption shown while the lookup animation runs.
const FINDING_CAPTION: &str = "mencari lokasi saat ini";
/// Caption shown on the institution screen when the label never resolved.
const LOCATION_NOT_FOUND: &str = "Location not found";
const WELCOME_BANNER: &str = "SELAMAT DATANG";

/// What a single splash screen shows: a headline plus detail lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageView {
    pub title: String,
    pub lines: Vec<String>,
}

/// View-model for the given state.
///
/// Uses whatever label value is known at render time; a label resolving
/// later does not retroactively change an already-rendered screen.
/// Returns `None` for the terminal state, which has no screen.
pub fn stage_view(
    state: SplashState,
    label: &LocationLabel,
    profile: &UserProfile,
) -> Option<StageView> {
    let view = match state {
        SplashState::Logo => StageView {
            title: APP_TITLE.to_string(),
            lines: Vec::new(),
        },
        SplashState::FindingLocation => StageView {
            title: FINDING_CAPTION.to_string(),
            lines: Vec::new(),
        },
        SplashState::InstitutionLogo => StageView {
            title: if label.is_resolved() {
                label.display().to_string()
            } else {
                LOCATION_NOT_FOUND.to_string()
            },
            lines: Vec::new(),
        },
        SplashState::Welcome => StageView {
            title: WELCOME_BANNER.to_string(),
            lines: Vec::new(),
        },
        SplashState::UserInfo => StageView {
            title: String::new(),
            lines: vec![
                format!("NIM : {}", profile.id),
                format!("NAMA : {}", profile.name),
                format!("KELAS : {}", profile.class_label),
            ],
        },
        SplashState::Done => return None,
    };
    Some(view)
}
