//! Location service adapters.

mod scripted;

pub use scripted::ScriptedLocationService;
