//! Search and heuristic configuration.

use serde::{Deserialize, Serialize};

/// Weights for the leaf evaluation.
///
/// Scores are from the fugitive's point of view; higher is better for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    /// Subtracted when a pursuer stands next to the fugitive.
    pub adjacent_penalty: i64,

    /// Per hop to the nearest pursuer.
    pub distance: i64,

    /// Per free neighbour, no double ticket in hand.
    pub free_adjacent: i64,

    /// Per free neighbour when a pursuer is adjacent, no double ticket in hand.
    pub cornered_free_adjacent: i64,

    /// Per free neighbour with a double ticket in hand.
    pub double_free_adjacent: i64,

    /// Per free neighbour when a pursuer is adjacent, double ticket in hand.
    pub double_cornered_free_adjacent: i64,

    /// Per free node two hops away (double ticket in hand).
    pub free_secondary: i64,

    /// Divides the two-hop count when a pursuer is adjacent.
    pub cornered_secondary_divisor: i64,

    /// Stand-in for the nearest distance when no pursuer is reachable.
    pub unreachable_distance: u32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            adjacent_penalty: 5000,
            distance: 50,
            free_adjacent: 20,
            cornered_free_adjacent: 50,
            double_free_adjacent: 25,
            double_cornered_free_adjacent: 60,
            free_secondary: 8,
            cornered_secondary_divisor: 10,
            unreachable_distance: 10,
        }
    }
}

/// Minimax configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies below the root (each fugitive ply and each joint pursuer ply
    /// counts as one). Iterative deepening stops here.
    pub max_depth: u32,

    /// Leaf evaluation weights.
    pub weights: HeuristicWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            weights: HeuristicWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Set the depth cap.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the heuristic weights.
    #[must_use]
    pub fn with_weights(mut self, weights: HeuristicWeights) -> Self {
        self.weights = weights;
        self
    }
}
