//! Use cases driving the splash sequence.

pub mod resolve_location;
pub mod splash;
