//! Fugitive travel log.
//!
//! One entry is appended per fugitive leg. In reveal rounds the entry carries
//! the destination; otherwise only the ticket kind is recorded.

use serde::{Deserialize, Serialize};

use super::node::NodeId;
use super::ticket::Ticket;

/// A single travel log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEntry {
    /// Ticket used for the leg.
    pub ticket: Ticket,

    /// Destination of the leg, present only in reveal rounds.
    pub location: Option<NodeId>,
}

impl LogEntry {
    /// An entry that hides the destination.
    #[must_use]
    pub const fn hidden(ticket: Ticket) -> Self {
        Self {
            ticket,
            location: None,
        }
    }

    /// An entry that reveals the destination.
    #[must_use]
    pub const fn reveal(ticket: Ticket, location: NodeId) -> Self {
        Self {
            ticket,
            location: Some(location),
        }
    }

    /// Build the entry for a leg, revealing iff `reveal` is set.
    #[must_use]
    pub const fn for_leg(ticket: Ticket, location: NodeId, reveal: bool) -> Self {
        if reveal {
            Self::reveal(ticket, location)
        } else {
            Self::hidden(ticket)
        }
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.location.is_some()
    }
}
