//! Splash Application Orchestration Layer
//!
//! This crate contains the splash use cases and the timed sequence runtime.

pub mod usecases;

pub use usecases::resolve_location::ResolveLocation;
pub use usecases::splash::{SplashRunError, SplashSequencer};
