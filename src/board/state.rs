//! Battlefield snapshot for one resolution.
//!
//! Bundles the per-invocation read-only lookups: terrain by hex and the
//! current unit roster. The engine never mutates a battlefield; updated
//! positions are a collaborator concern.

use serde::{Deserialize, Serialize};

use super::terrain::{HexMap, Terrain};
use super::unit::UnitPosition;

/// The static battlefield data supplied with one order submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Battlefield {
    /// Terrain category by hex coordinate.
    pub terrain: HexMap,
    /// Current unit positions, as supplied by the roster source.
    pub positions: Vec<UnitPosition>,
}

impl Battlefield {
    /// Creates an empty battlefield (no mapped hexes, no units).
    pub fn new() -> Self {
        Battlefield::default()
    }

    /// Creates a battlefield from a terrain map and a unit roster.
    pub fn with_data(terrain: HexMap, positions: Vec<UnitPosition>) -> Self {
        Battlefield { terrain, positions }
    }

    /// Returns the terrain at `hex`, defaulting to open ground.
    pub fn terrain_at(&self, hex: &str) -> Terrain {
        self.terrain.terrain_or_open(hex)
    }
}
