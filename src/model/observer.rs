//! Match observers.
//!
//! Observers are registered with a [`Model`](super::Model) and told about
//! every change to the held state. Identity is by allocation: the same `Arc`
//! cannot be registered twice, while two separate observers of the same type
//! can.

use std::sync::Arc;

use crate::rules::GameState;

/// What happened to the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// A move was applied and the game goes on.
    MoveMade,
    /// The game ended, or was abandoned after an illegal move.
    GameOver,
}

/// Receives model notifications.
pub trait Observer: Send + Sync {
    fn on_model_changed(&self, state: &GameState, event: Event);
}

/// Registration failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ObserverError {
    #[display("observer is already registered")]
    AlreadyRegistered,
    #[display("observer is not registered")]
    NotRegistered,
}

/// Whether two handles point at the same observer.
pub(crate) fn same_observer(a: &Arc<dyn Observer>, b: &Arc<dyn Observer>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a).cast::<()>(),
        Arc::as_ptr(b).cast::<()>(),
    )
}
