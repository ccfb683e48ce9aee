//! Match model and loop.
//!
//! - `model`: the authoritative state with observer notification
//! - `observer`: events and the observer trait
//! - `runner`: plays two agents against each other through a model

#[allow(clippy::module_inception)]
pub mod model;
pub mod observer;
pub mod runner;

pub use model::Model;
pub use observer::{Event, Observer, ObserverError};
pub use runner::{run_match, MatchConfig, MatchReport};
