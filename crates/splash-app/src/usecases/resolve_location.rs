//! Location resolution use case.
//!
//! Implements the permission-gated one-shot lookup and label composition.
//! Every failure path degrades to the unknown label; nothing here is fatal
//! and nothing is retried.

use std::sync::Arc;

use tracing::{debug, warn};

use splash_core::ports::{GeocoderPort, LocationError, LocationPort};
use splash_core::splash::LocationLabel;

/// Use case that resolves the human-readable location label.
pub struct ResolveLocation {
    location: Arc<dyn LocationPort>,
    geocoder: Arc<dyn GeocoderPort>,
}

impl ResolveLocation {
    /// Create a new ResolveLocation use case from trait objects.
    pub fn new(location: Arc<dyn LocationPort>, geocoder: Arc<dyn GeocoderPort>) -> Self {
        Self { location, geocoder }
    }

    /// Run the full resolution protocol once.
    ///
    /// Always returns a label; failures map to `Unknown` and are only logged.
    pub async fn execute(&self) -> LocationLabel {
        match self.try_resolve().await {
            Ok(label) => label,
            Err(err) => {
                warn!(error = %err, "location resolution degraded to unknown");
                LocationLabel::Unknown
            }
        }
    }

    async fn try_resolve(&self) -> Result<LocationLabel, LocationError> {
        if !self.location.is_available() {
            return Err(LocationError::CapabilityUnavailable);
        }

        if !self.location.has_permission().await {
            debug!("location permission not yet granted, prompting user");
            if !self.location.request_permission().await {
                return Err(LocationError::PermissionDenied);
            }
        }

        let fix = self
            .location
            .request_fix()
            .await
            .map_err(|err| LocationError::LookupFailed(err.to_string()))?
            .ok_or_else(|| LocationError::LookupFailed("no fix delivered".to_string()))?;

        let place = self
            .geocoder
            .reverse_geocode(fix)
            .await
            .map_err(|err| LocationError::LookupFailed(err.to_string()))?;

        let label = place
            .as_ref()
            .map(LocationLabel::from_place)
            .unwrap_or(LocationLabel::Unknown);

        // An address with every component blank counts as a failed lookup.
        if !label.is_resolved() {
            return Err(LocationError::LookupFailed(
                "reverse geocoding yielded nothing".to_string(),
            ));
        }

        debug!(
            latitude = fix.latitude,
            longitude = fix.longitude,
            label = label.display(),
            "location resolved"
        );
        Ok(label)
    }
}
