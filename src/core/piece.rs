//! Piece identification.
//!
//! ## Piece
//!
//! Either the single fugitive or one pursuer. Pursuers are identified by
//! their position in the ordered pursuer list, so any number of pursuers is
//! supported without per-colour special cases.

use serde::{Deserialize, Serialize};

/// Pursuer identifier. The index is the pursuer's position in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PursuerId(pub u8);

impl PursuerId {
    /// Create a new pursuer ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw pursuer index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all pursuer IDs for a game with `count` pursuers.
    ///
    /// ```
    /// use rust_pursuit::core::PursuerId;
    ///
    /// let ids: Vec<_> = PursuerId::all(3).collect();
    /// assert_eq!(ids, vec![PursuerId::new(0), PursuerId::new(1), PursuerId::new(2)]);
    /// ```
    pub fn all(count: usize) -> impl Iterator<Item = PursuerId> {
        assert!(count <= 255, "At most 255 pursuers supported");
        (0..count as u8).map(PursuerId)
    }
}

impl std::fmt::Display for PursuerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pursuer {}", self.0)
    }
}

/// A game piece.
///
/// Ordering puts the fugitive before every pursuer, which is also turn order
/// inside a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Piece {
    Fugitive,
    Pursuer(PursuerId),
}

impl Piece {
    /// Shorthand for `Piece::Pursuer(PursuerId::new(index))`.
    #[must_use]
    pub const fn pursuer(index: u8) -> Self {
        Piece::Pursuer(PursuerId(index))
    }

    #[must_use]
    pub const fn is_fugitive(self) -> bool {
        matches!(self, Piece::Fugitive)
    }

    #[must_use]
    pub const fn is_pursuer(self) -> bool {
        matches!(self, Piece::Pursuer(_))
    }

    /// The pursuer id, if this piece is a pursuer.
    #[must_use]
    pub const fn as_pursuer(self) -> Option<PursuerId> {
        match self {
            Piece::Pursuer(id) => Some(id),
            Piece::Fugitive => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Fugitive => f.write_str("Fugitive"),
            Piece::Pursuer(id) => write!(f, "{}", id),
        }
    }
}
