//! # splash-core
//!
//! Core domain models and business logic for the splash sequence.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod geo;
pub mod ports;
pub mod profile;
pub mod splash;

// Re-export commonly used types at the crate root
pub use config::{GeocoderConfig, GeocoderKind, LocationConfig, SplashConfig, StageTimings};
pub use geo::{GeoFix, ResolvedPlace};
pub use profile::UserProfile;
pub use splash::{
    stage_view, LocationLabel, SplashAction, SplashEvent, SplashState, SplashStateMachine,
    StageView,
};
