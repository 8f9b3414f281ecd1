//! Offline reverse geocoder backed by a coarse lookup table.
//!
//! Good enough for the scripted splash: it maps a fix to the nearest known
//! place within a fixed radius and reports nothing otherwise.

use anyhow::Result;
use async_trait::async_trait;

use splash_core::geo::{GeoFix, ResolvedPlace};
use splash_core::ports::GeocoderPort;

/// (latitude, longitude, locality, admin area, country)
const PLACES: &[(f64, f64, &str, &str, &str)] = &[
    (-6.2383, 106.9756, "Bekasi", "Jawa Barat", "Indonesia"),
    (-6.9147, 107.6098, "Bandung", "Jawa Barat", "Indonesia"),
    (-6.2088, 106.8456, "Jakarta", "DKI Jakarta", "Indonesia"),
    (-6.9932, 110.4203, "Semarang", "Jawa Tengah", "Indonesia"),
    (-7.2575, 112.7521, "Surabaya", "Jawa Timur", "Indonesia"),
];

pub struct StaticGeocoder {
    /// Maximum distance, in degrees, at which a table entry still matches.
    max_distance_deg: f64,
}

impl Default for StaticGeocoder {
    fn default() -> Self {
        Self {
            max_distance_deg: 0.5,
        }
    }
}

#[async_trait]
impl GeocoderPort for StaticGeocoder {
    async fn reverse_geocode(&self, fix: GeoFix) -> Result<Option<ResolvedPlace>> {
        let nearest = PLACES
            .iter()
            .map(|entry| {
                let (lat, lon, ..) = *entry;
                let distance =
                    ((fix.latitude - lat).powi(2) + (fix.longitude - lon).powi(2)).sqrt();
                (distance, entry)
            })
            .filter(|(distance, _)| *distance <= self.max_distance_deg)
            .min_by(|(a, _), (b, _)| a.total_cmp(b));

        Ok(nearest.map(|(_, (_, _, locality, admin_area, country))| ResolvedPlace {
            locality: Some((*locality).to_string()),
            sub_admin_area: None,
            admin_area: Some((*admin_area).to_string()),
            country: Some((*country).to_string()),
        }))
    }
}
