//! Battlefield data model.
//!
//! Contains the static lookups a resolution reads: terrain categories
//! and modifiers, unit types and strength coefficients, and the current
//! unit roster.

pub mod state;
pub mod terrain;
pub mod unit;

pub use state::Battlefield;
pub use terrain::{
    HexMap, Terrain, TerrainParseError, TerrainTable, ALL_TERRAINS, DEFAULT_MODIFIER,
    TERRAIN_COUNT,
};
pub use unit::{
    StrengthTable, UnitPosition, UnitType, UnitTypeParseError, ALL_UNIT_TYPES, DEFAULT_STRENGTH,
    UNIT_TYPE_COUNT,
};
