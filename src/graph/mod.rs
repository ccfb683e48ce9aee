//! Transport graph and shortest-path distances.
//!
//! - `network`: the undirected, mode-labelled graph of board locations
//! - `distance`: unweighted BFS distances that ignore transport modes

pub mod distance;
pub mod network;

pub use distance::{distance, DistanceMap};
pub use network::{Edge, Graph};
