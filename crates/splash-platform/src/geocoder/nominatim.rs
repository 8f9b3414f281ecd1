//! Nominatim reverse geocoder.
//!
//! Talks to a Nominatim-compatible `/reverse` endpoint and maps its address
//! payload onto the neutral [`ResolvedPlace`] shape.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use splash_core::geo::{GeoFix, ResolvedPlace};
use splash_core::ports::GeocoderPort;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct NominatimGeocoder {
    client: reqwest::Client,
    endpoint: String,
}

impl NominatimGeocoder {
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("geosplash/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build nominatim http client")?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl GeocoderPort for NominatimGeocoder {
    async fn reverse_geocode(&self, fix: GeoFix) -> Result<Option<ResolvedPlace>> {
        let url = format!("{}/reverse", self.endpoint);
        debug!(lat = fix.latitude, lon = fix.longitude, "nominatim reverse lookup");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", fix.latitude.to_string()),
                ("lon", fix.longitude.to_string()),
            ])
            .send()
            .await
            .context("nominatim request failed")?
            .error_for_status()
            .context("nominatim returned an error status")?;

        let body: ReverseResponse = response
            .json()
            .await
            .context("failed to decode nominatim response")?;

        Ok(body.address.map(ReverseAddress::into_place))
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<ReverseAddress>,
}

/// The subset of Nominatim address fields the splash cares about. Which of
/// city/town/village is present depends on the place's OSM classification.
#[derive(Debug, Default, Deserialize)]
struct ReverseAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    county: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

impl ReverseAddress {
    fn into_place(self) -> ResolvedPlace {
        ResolvedPlace {
            locality: self.city.or(self.town).or(self.village),
            sub_admin_area: self.municipality.or(self.county),
            admin_area: self.state,
            country: self.country,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_payload_maps_to_locality() {
        let body: ReverseResponse = serde_json::from_str(
            r#"{
                "address": {
                    "city": "Bekasi",
                    "county": "Bekasi",
                    "state": "Jawa Barat",
                    "country": "Indonesia"
                }
            }"#,
        )
        .unwrap();

        let place = body.address.unwrap().into_place();
        assert_eq!(place.locality.as_deref(), Some("Bekasi"));
        assert_eq!(place.sub_admin_area.as_deref(), Some("Bekasi"));
        assert_eq!(place.admin_area.as_deref(), Some("Jawa Barat"));
        assert_eq!(place.country.as_deref(), Some("Indonesia"));
    }

    #[test]
    fn village_falls_back_when_no_city_is_present() {
        let body: ReverseResponse = serde_json::from_str(
            r#"{
                "address": {
                    "village": "Cikarang",
                    "municipality": "Kabupaten Bekasi",
                    "state": "Jawa Barat"
                }
            }"#,
        )
        .unwrap();

        let place = body.address.unwrap().into_place();
        assert_eq!(place.locality.as_deref(), Some("Cikarang"));
        assert_eq!(place.sub_admin_area.as_deref(), Some("Kabupaten Bekasi"));
        assert_eq!(place.country, None);
    }

    #[test]
    fn missing_address_block_decodes_to_none() {
        let body: ReverseResponse = serde_json::from_str(r#"{"error": "Unable to geocode"}"#).unwrap();
        assert!(body.address.is_none());
    }
}
