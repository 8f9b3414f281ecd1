//! Reverse-geocoding port.

use anyhow::Result;
use async_trait::async_trait;

use crate::geo::{GeoFix, ResolvedPlace};

/// Reverse-geocoding collaborator.
///
/// A failure is treated by callers exactly like "no result".
#[async_trait]
pub trait GeocoderPort: Send + Sync {
    /// Convert a fix into address components, if the provider knows the area.
    async fn reverse_geocode(&self, fix: GeoFix) -> Result<Option<ResolvedPlace>>;
}
