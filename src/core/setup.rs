//! Static match setup: the transport graph and the reveal schedule.
//!
//! A setup is built once per match and shared read-only (via `Arc`) by every
//! state derived from it.

use crate::graph::Graph;

/// Reasons a setup cannot be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SetupError {
    #[display("round schedule is empty")]
    EmptyRounds,
    #[display("transport graph has no edges")]
    EmptyGraph,
}

/// Graph plus one reveal flag per fugitive leg.
#[derive(Clone, Debug)]
pub struct Setup {
    graph: Graph,
    rounds: Vec<bool>,
}

impl Setup {
    /// Create a setup, rejecting an empty schedule or an edgeless graph.
    pub fn new(graph: Graph, rounds: Vec<bool>) -> Result<Self, SetupError> {
        if rounds.is_empty() {
            return Err(SetupError::EmptyRounds);
        }
        if graph.edge_count() == 0 {
            return Err(SetupError::EmptyGraph);
        }
        Ok(Self { graph, rounds })
    }

    /// The classic 24-round schedule, revealing rounds 3, 8, 13, 18 and 24.
    #[must_use]
    pub fn standard_rounds() -> Vec<bool> {
        (1..=24).map(|r| matches!(r, 3 | 8 | 13 | 18 | 24)).collect()
    }

    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[must_use]
    pub fn rounds(&self) -> &[bool] {
        &self.rounds
    }

    /// Total number of fugitive legs in the match.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Whether the leg logged at position `log_len` is revealed.
    ///
    /// # Panics
    ///
    /// Panics if `log_len` is past the end of the schedule.
    #[must_use]
    pub fn is_reveal_round(&self, log_len: usize) -> bool {
        self.rounds[log_len]
    }
}
