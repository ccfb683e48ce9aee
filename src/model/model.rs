//! The match model: the authoritative state plus its observers.

use std::sync::Arc;

use tracing::{debug, info};

use crate::core::Move;
use crate::rules::{AdvanceError, GameState};

use super::observer::{same_observer, Event, Observer, ObserverError};

/// Holds the current game state and notifies observers of changes.
pub struct Model {
    state: GameState,
    observers: Vec<Arc<dyn Observer>>,
}

impl Model {
    /// Create a model around an opening state.
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    /// The current state.
    #[must_use]
    pub fn current_board(&self) -> &GameState {
        &self.state
    }

    /// Registered observers, in registration order.
    #[must_use]
    pub fn observers(&self) -> &[Arc<dyn Observer>] {
        &self.observers
    }

    pub fn register_observer(&mut self, observer: Arc<dyn Observer>) -> Result<(), ObserverError> {
        if self.observers.iter().any(|o| same_observer(o, &observer)) {
            return Err(ObserverError::AlreadyRegistered);
        }
        self.observers.push(observer);
        Ok(())
    }

    pub fn unregister_observer(
        &mut self,
        observer: &Arc<dyn Observer>,
    ) -> Result<(), ObserverError> {
        let index = self
            .observers
            .iter()
            .position(|o| same_observer(o, observer))
            .ok_or(ObserverError::NotRegistered)?;
        self.observers.remove(index);
        Ok(())
    }

    /// Apply a move and notify observers.
    ///
    /// An illegal move leaves the state as it was, reports `GameOver`, and
    /// returns the error so the caller can treat it as a forfeit.
    pub fn choose_move(&mut self, mv: &Move) -> Result<Event, AdvanceError> {
        match self.state.advance(mv) {
            Ok(next) => {
                self.state = next;
                let event = if self.state.is_terminal() {
                    info!(winners = ?self.state.winners(), "game over");
                    Event::GameOver
                } else {
                    Event::MoveMade
                };
                self.notify(event);
                Ok(event)
            }
            Err(err) => {
                debug!(error = %err, "move rejected, ending game");
                self.notify(Event::GameOver);
                Err(err)
            }
        }
    }

    fn notify(&self, event: Event) {
        for observer in &self.observers {
            observer.on_model_changed(&self.state, event);
        }
    }
}
