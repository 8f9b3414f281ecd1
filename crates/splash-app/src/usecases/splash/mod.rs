//! Splash sequence use cases.
//!
//! This module exposes the splash sequencer.

mod context;
pub mod sequencer;

pub use sequencer::{SplashRunError, SplashSequencer};
