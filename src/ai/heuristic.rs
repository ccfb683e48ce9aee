//! Leaf evaluation for the fugitive search.
//!
//! Rewards distance from the nearest pursuer and room to run. With a double
//! ticket in hand, nodes two hops out count as well, since the fugitive can
//! reach them in one turn.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::NodeId;
use crate::graph::{DistanceMap, Graph};

use super::config::HeuristicWeights;

/// Score a position from the fugitive's point of view.
///
/// Pursuers the fugitive cannot reach are ignored. If none are reachable the
/// nearest distance is taken as `weights.unreachable_distance`.
#[must_use]
pub fn evaluate(
    graph: &Graph,
    fugitive: NodeId,
    doubles: u32,
    pursuers: &[NodeId],
    weights: &HeuristicWeights,
) -> i64 {
    let map = DistanceMap::from_source(graph, fugitive);
    let mut distances: SmallVec<[u32; 8]> =
        pursuers.iter().filter_map(|&p| map.get(p, graph)).collect();
    distances.sort_unstable();

    let nearest = distances
        .first()
        .copied()
        .unwrap_or(weights.unreachable_distance);
    let cornered = nearest <= 1;

    let free: SmallVec<[NodeId; 8]> = graph
        .adjacent_nodes(fugitive)
        .filter(|n| !pursuers.contains(n))
        .collect();
    let free_adjacent = free.len() as i64;

    let mut score = if doubles > 0 {
        let secondary: FxHashSet<NodeId> = free
            .iter()
            .flat_map(|&n| graph.adjacent_nodes(n))
            .filter(|&n| n != fugitive && !pursuers.contains(&n))
            .collect();
        let free_secondary = secondary.len() as i64;

        if cornered {
            -weights.adjacent_penalty
                + free_adjacent * weights.double_cornered_free_adjacent
                + free_secondary
                    .checked_div(weights.cornered_secondary_divisor)
                    .unwrap_or(0)
        } else {
            i64::from(nearest) * weights.distance
                + free_adjacent * weights.double_free_adjacent
                + free_secondary * weights.free_secondary
        }
    } else if cornered {
        -weights.adjacent_penalty + free_adjacent * weights.cornered_free_adjacent
    } else {
        i64::from(nearest) * weights.distance + free_adjacent * weights.free_adjacent
    };

    // Pressure from the rest of the pack.
    if distances.len() > 1 {
        let rest = &distances[1..];
        let sum: i64 = rest.iter().map(|&d| i64::from(d)).sum();
        score += sum / rest.len() as i64;
    }

    score
}
