//! Location label composition.

use serde::{Deserialize, Serialize};

use crate::geo::ResolvedPlace;

/// Human-readable location shown on the institution logo screen.
///
/// Write-once per session: a session label may be upgraded from `Unknown`
/// to `Resolved` at most once and is never rewritten afterwards. The
/// write-once gate itself lives with the sequencer context; this type only
/// carries the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationLabel {
    /// Sentinel value: resolution pending, failed, or unavailable.
    #[default]
    Unknown,
    /// Composed "locality, region, country" display string.
    Resolved(String),
}

impl LocationLabel {
    /// Compose a label from reverse-geocoded address components.
    ///
    /// The city slot prefers `locality` and falls back to `sub_admin_area`;
    /// missing or blank components are omitted without stray separators.
    /// An entirely empty address yields `Unknown`.
    pub fn from_place(place: &ResolvedPlace) -> Self {
        let city = place
            .locality
            .as_deref()
            .or(place.sub_admin_area.as_deref());
        let parts: Vec<&str> = [city, place.admin_area.as_deref(), place.country.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            LocationLabel::Unknown
        } else {
            LocationLabel::Resolved(parts.join(", "))
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, LocationLabel::Resolved(_))
    }

    /// Display string; `Unknown` renders as the sentinel text.
    pub fn display(&self) -> &str {
        match self {
            LocationLabel::Unknown => "Unknown",
            LocationLabel::Resolved(label) => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LocationLabel;
    use crate::geo::ResolvedPlace;

    fn place(
        locality: Option<&str>,
        sub_admin_area: Option<&str>,
        admin_area: Option<&str>,
        country: Option<&str>,
    ) -> ResolvedPlace {
        ResolvedPlace {
            locality: locality.map(str::to_string),
            sub_admin_area: sub_admin_area.map(str::to_string),
            admin_area: admin_area.map(str::to_string),
            country: country.map(str::to_string),
        }
    }

    #[test]
    fn label_composes_all_three_components() {
        let label =
            LocationLabel::from_place(&place(Some("Bekasi"), None, Some("Jawa Barat"), Some("Indonesia")));
        assert_eq!(
            label,
            LocationLabel::Resolved("Bekasi, Jawa Barat, Indonesia".to_string())
        );
    }

    #[test]
    fn label_omits_missing_locality_without_stray_separators() {
        let label = LocationLabel::from_place(&place(None, None, Some("Jawa Barat"), Some("Indonesia")));
        assert_eq!(
            label,
            LocationLabel::Resolved("Jawa Barat, Indonesia".to_string())
        );
    }

    #[test]
    fn label_falls_back_to_sub_admin_area_for_the_city_slot() {
        let label = LocationLabel::from_place(&place(
            None,
            Some("Kota Bekasi"),
            Some("Jawa Barat"),
            Some("Indonesia"),
        ));
        assert_eq!(
            label,
            LocationLabel::Resolved("Kota Bekasi, Jawa Barat, Indonesia".to_string())
        );
    }

    #[test]
    fn label_treats_empty_address_as_unknown() {
        assert_eq!(
            LocationLabel::from_place(&ResolvedPlace::default()),
            LocationLabel::Unknown
        );
    }

    #[test]
    fn label_ignores_blank_components() {
        let label = LocationLabel::from_place(&place(Some("  "), None, Some(""), Some("Indonesia")));
        assert_eq!(label, LocationLabel::Resolved("Indonesia".to_string()));
    }

    #[test]
    fn unknown_label_displays_sentinel_text() {
        assert_eq!(LocationLabel::Unknown.display(), "Unknown");
        assert!(!LocationLabel::Unknown.is_resolved());
    }
}
