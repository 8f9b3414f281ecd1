//! Splash sequence domain: states, the transition function, the location
//! label, and per-stage view-models.

mod label;
mod state_machine;
mod view;

pub use label::LocationLabel;
pub use state_machine::{SplashAction, SplashEvent, SplashState, SplashStateMachine};
pub use view::{stage_view, StageView};
