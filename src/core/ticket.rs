//! Tickets, transport modes, and per-player ticket wallets.
//!
//! ## Ticket kinds
//!
//! Three transport tickets (taxi, bus, underground) plus two special kinds:
//! - `Secret`: usable on any edge; the log records only that a secret was used
//! - `Double`: lets the fugitive take two legs as one turn
//!
//! ## Tickets
//!
//! A fixed-size count table indexed by `Ticket`. Cheap to copy, so players
//! hold it by value and every mutator returns a new wallet.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A ticket kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    Double,
    Secret,
}

impl Ticket {
    /// Every ticket kind, in wallet order.
    pub const ALL: [Ticket; 5] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Double,
        Ticket::Secret,
    ];

    /// Position of this kind in a wallet.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Tickets a pursuer is never allowed to hold.
    #[must_use]
    pub const fn is_fugitive_only(self) -> bool {
        matches!(self, Ticket::Double | Ticket::Secret)
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ticket::Taxi => "taxi",
            Ticket::Bus => "bus",
            Ticket::Underground => "underground",
            Ticket::Double => "double",
            Ticket::Secret => "secret",
        };
        f.write_str(name)
    }
}

/// A transport mode labelling a graph edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    /// Only reachable with a secret ticket.
    Ferry,
}

impl Transport {
    /// The ticket needed to travel by this mode.
    #[must_use]
    pub const fn required_ticket(self) -> Ticket {
        match self {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }
}

/// Ticket counts for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tickets {
    counts: [u32; 5],
}

impl Tickets {
    /// An empty wallet.
    #[must_use]
    pub const fn empty() -> Self {
        Self { counts: [0; 5] }
    }

    /// Starting wallet for the fugitive in the classic game.
    #[must_use]
    pub fn fugitive_default() -> Self {
        Self::empty()
            .with(Ticket::Taxi, 4)
            .with(Ticket::Bus, 3)
            .with(Ticket::Underground, 3)
            .with(Ticket::Double, 2)
            .with(Ticket::Secret, 5)
    }

    /// Starting wallet for a pursuer in the classic game.
    #[must_use]
    pub fn pursuer_default() -> Self {
        Self::empty()
            .with(Ticket::Taxi, 11)
            .with(Ticket::Bus, 8)
            .with(Ticket::Underground, 4)
    }

    /// Set the count for one ticket kind (builder pattern).
    #[must_use]
    pub fn with(mut self, ticket: Ticket, count: u32) -> Self {
        self.counts[ticket.index()] = count;
        self
    }

    /// Count of a ticket kind.
    #[must_use]
    pub fn count(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.index()]
    }

    /// Iterate over (kind, count) pairs, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        Ticket::ALL.iter().map(|&t| (t, self.counts[t.index()]))
    }

    /// Total number of tickets held.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

impl Index<Ticket> for Tickets {
    type Output = u32;

    fn index(&self, ticket: Ticket) -> &Self::Output {
        &self.counts[ticket.index()]
    }
}

impl IndexMut<Ticket> for Tickets {
    fn index_mut(&mut self, ticket: Ticket) -> &mut Self::Output {
        &mut self.counts[ticket.index()]
    }
}
