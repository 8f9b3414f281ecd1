//! Geographic primitives shared by the location and geocoding ports.

use serde::{Deserialize, Serialize};

/// A single resolved geographic coordinate ("fix") from the location subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
}

/// Address components produced by reverse-geocoding a fix.
///
/// Every component is optional; providers rarely fill all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    /// City-level component.
    pub locality: Option<String>,
    /// Sub-administrative area, used as the city fallback when `locality`
    /// is absent.
    pub sub_admin_area: Option<String>,
    /// Administrative region (province / state).
    pub admin_area: Option<String>,
    /// Country name.
    pub country: Option<String>,
}
