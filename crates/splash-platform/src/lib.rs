//! # splash-platform
//!
//! Platform-side implementations of the splash ports: the scripted
//! location service, the reverse-geocoding backends, and settings loading.

pub mod geocoder;
pub mod location;
pub mod settings;
