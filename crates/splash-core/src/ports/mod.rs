//! Port interfaces for the application layer
//!
//! Ports define the contract between the splash use cases and the platform
//! implementations. This follows Hexagonal Architecture principles, allowing
//! the core business logic to remain independent of external dependencies.

mod geocoder;
mod location;
mod navigation;
mod splash_event;

pub use geocoder::GeocoderPort;
pub use location::{LocationError, LocationPort};
pub use navigation::NavigationPort;
pub use splash_event::SplashEventPort;
