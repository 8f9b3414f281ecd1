//! Reverse-geocoding adapters.

mod nominatim;
mod static_table;

use std::sync::Arc;

use anyhow::Result;

use splash_core::config::{GeocoderConfig, GeocoderKind};
use splash_core::ports::GeocoderPort;

pub use nominatim::NominatimGeocoder;
pub use static_table::StaticGeocoder;

/// Build the configured geocoder backend.
pub fn build_geocoder(config: &GeocoderConfig) -> Result<Arc<dyn GeocoderPort>> {
    Ok(match config.backend {
        GeocoderKind::Static => Arc::new(StaticGeocoder::default()),
        GeocoderKind::Nominatim => Arc::new(NominatimGeocoder::new(&config.endpoint)?),
    })
}
