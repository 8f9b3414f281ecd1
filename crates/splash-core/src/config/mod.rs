//! Splash configuration domain model.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geo::GeoFix;
use crate::profile::UserProfile;
use crate::splash::SplashState;

/// Top-level splash configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// Per-stage dwell durations.
    pub timings: StageTimings,
    /// Identity shown on the UserInfo screen.
    pub profile: UserProfile,
    /// Location service behaviour and geocoder selection.
    pub location: LocationConfig,
}

/// Per-stage dwell durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageTimings {
    pub logo_ms: u64,
    pub finding_location_ms: u64,
    pub institution_logo_ms: u64,
    pub welcome_ms: u64,
    pub user_info_ms: u64,
}

impl Default for StageTimings {
    fn default() -> Self {
        Self {
            logo_ms: 2500,
            finding_location_ms: 3000,
            institution_logo_ms: 2500,
            welcome_ms: 2500,
            user_info_ms: 3000,
        }
    }
}

impl StageTimings {
    /// How long the given screen stays up before its timer fires.
    ///
    /// The terminal state has no dwell.
    pub fn dwell(&self, state: SplashState) -> Option<Duration> {
        let ms = match state {
            SplashState::Logo => self.logo_ms,
            SplashState::FindingLocation => self.finding_location_ms,
            SplashState::InstitutionLogo => self.institution_logo_ms,
            SplashState::Welcome => self.welcome_ms,
            SplashState::UserInfo => self.user_info_ms,
            SplashState::Done => return None,
        };
        Some(Duration::from_millis(ms))
    }
}

/// Behaviour of the scripted location service plus geocoder choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    /// Whether the location-services capability exists on this device.
    pub available: bool,
    /// Whether permission was granted before this session started.
    pub permission_granted: bool,
    /// Outcome of the permission prompt when one has to be shown.
    pub prompt_grants: bool,
    /// Coordinate the scripted service answers with, if any.
    pub fix: Option<GeoFix>,
    /// Artificial latency before the fix is delivered, in milliseconds.
    pub fix_delay_ms: u64,
    /// Reverse geocoder backend.
    pub geocoder: GeocoderConfig,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            available: true,
            permission_granted: false,
            prompt_grants: true,
            // Bekasi, Jawa Barat
            fix: Some(GeoFix {
                latitude: -6.2383,
                longitude: 106.9756,
            }),
            fix_delay_ms: 400,
            geocoder: GeocoderConfig::default(),
        }
    }
}

/// Reverse geocoder selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    pub backend: GeocoderKind,
    /// Nominatim-compatible endpoint, used when `backend = "nominatim"`.
    pub endpoint: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            backend: GeocoderKind::Static,
            endpoint: "https://nominatim.openstreetmap.org".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeocoderKind {
    /// Built-in lookup table, works offline.
    Static,
    /// Nominatim-compatible HTTP endpoint.
    Nominatim,
}
