//! Location port - abstracts the device location capability
//!
//! This port mirrors a platform fused-location client: a capability probe,
//! the permission gate, and a single-shot high-accuracy fix request.

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::geo::GeoFix;

/// Non-fatal failure modes of location resolution.
///
/// Every variant degrades to the unknown label; none is surfaced to the
/// user as an error and none is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location capability unavailable")]
    CapabilityUnavailable,

    #[error("location permission denied")]
    PermissionDenied,

    #[error("location lookup failed: {0}")]
    LookupFailed(String),
}

/// Location capability collaborator.
#[async_trait]
pub trait LocationPort: Send + Sync {
    /// Whether location services exist on this device at all.
    fn is_available(&self) -> bool;

    /// Whether permission has already been granted.
    async fn has_permission(&self) -> bool;

    /// Prompt the user for permission. Suspends until they respond.
    ///
    /// Invoked at most once per session.
    async fn request_permission(&self) -> bool;

    /// Request one high-accuracy fix.
    ///
    /// Single-shot semantics: implementations must stop listening after
    /// the first result so no background listener leaks.
    async fn request_fix(&self) -> Result<Option<GeoFix>>;
}
