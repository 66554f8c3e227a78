//! Terrain categories and the hex-to-terrain map.
//!
//! Terrain feeds two rules: it scales defending strength in ground
//! attacks, and it divides the airborne landing success chance. A hex
//! missing from the map is treated as open ground.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The number of terrain categories.
pub const TERRAIN_COUNT: usize = 5;

/// A terrain category for a map hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Urban,
    Forest,
    Mountain,
    Coastal,
    Open,
}

/// All terrain categories, in modifier-table order.
pub const ALL_TERRAINS: [Terrain; TERRAIN_COUNT] = [
    Terrain::Urban,
    Terrain::Forest,
    Terrain::Mountain,
    Terrain::Coastal,
    Terrain::Open,
];

impl Terrain {
    /// Returns the lowercase wire tag used by the map data source.
    pub const fn tag(self) -> &'static str {
        match self {
            Terrain::Urban => "urban",
            Terrain::Forest => "forest",
            Terrain::Mountain => "mountain",
            Terrain::Coastal => "coastal",
            Terrain::Open => "open",
        }
    }

    /// Parses a terrain category from its wire tag.
    pub fn from_tag(tag: &str) -> Option<Terrain> {
        match tag {
            "urban" => Some(Terrain::Urban),
            "forest" => Some(Terrain::Forest),
            "mountain" => Some(Terrain::Mountain),
            "coastal" => Some(Terrain::Coastal),
            "open" => Some(Terrain::Open),
            _ => None,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a terrain tag is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown terrain tag: {0}")]
pub struct TerrainParseError(pub String);

impl FromStr for Terrain {
    type Err = TerrainParseError;

    fn from_str(s: &str) -> Result<Terrain, TerrainParseError> {
        Terrain::from_tag(s).ok_or_else(|| TerrainParseError(s.to_string()))
    }
}

/// Modifier applied when a terrain category is absent from the table.
pub const DEFAULT_MODIFIER: f64 = 1.0;

/// Per-category terrain difficulty multipliers.
///
/// Attacks read the target hex's modifier in the defender's favor;
/// airborne landings divide their base success chance by it. Absent
/// categories fall back to [`DEFAULT_MODIFIER`] through the one
/// auditable lookup path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainTable {
    modifiers: HashMap<Terrain, f64>,
}

impl TerrainTable {
    /// Creates an empty table; every lookup then yields the default.
    pub fn empty() -> Self {
        TerrainTable { modifiers: HashMap::new() }
    }

    /// Sets the modifier for a terrain category.
    pub fn set(&mut self, terrain: Terrain, modifier: f64) {
        self.modifiers.insert(terrain, modifier);
    }

    /// Returns the modifier for `terrain`, or [`DEFAULT_MODIFIER`] when
    /// the category is absent from the table.
    pub fn modifier_or_default(&self, terrain: Terrain) -> f64 {
        self.modifiers
            .get(&terrain)
            .copied()
            .unwrap_or(DEFAULT_MODIFIER)
    }

    /// Returns true if the table carries an entry for `terrain`.
    pub fn contains(&self, terrain: Terrain) -> bool {
        self.modifiers.contains_key(&terrain)
    }
}

impl Default for TerrainTable {
    /// The baseline modifiers from the scenario data.
    fn default() -> Self {
        let modifiers = [
            (Terrain::Urban, 1.5),
            (Terrain::Forest, 1.2),
            (Terrain::Mountain, 1.8),
            (Terrain::Coastal, 0.9),
            (Terrain::Open, 1.0),
        ]
        .into_iter()
        .collect();
        TerrainTable { modifiers }
    }
}

/// The hex-coordinate to terrain-category lookup for one invocation.
///
/// Hex coordinates are opaque identifiers supplied by the map source.
/// Absent hexes resolve to [`Terrain::Open`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HexMap {
    terrain: HashMap<String, Terrain>,
}

impl HexMap {
    /// Creates an empty hex map.
    pub fn new() -> Self {
        HexMap::default()
    }

    /// Records the terrain category for a hex.
    pub fn insert(&mut self, hex: impl Into<String>, terrain: Terrain) {
        self.terrain.insert(hex.into(), terrain);
    }

    /// Returns the terrain at `hex`, defaulting to open ground when the
    /// hex is absent from the map.
    pub fn terrain_or_open(&self, hex: &str) -> Terrain {
        self.terrain.get(hex).copied().unwrap_or(Terrain::Open)
    }

    /// Returns the number of mapped hexes.
    pub fn len(&self) -> usize {
        self.terrain.len()
    }

    /// Returns true if no hexes are mapped.
    pub fn is_empty(&self) -> bool {
        self.terrain.is_empty()
    }
}

impl FromIterator<(String, Terrain)> for HexMap {
    fn from_iter<I: IntoIterator<Item = (String, Terrain)>>(iter: I) -> Self {
        HexMap { terrain: iter.into_iter().collect() }
    }
}
