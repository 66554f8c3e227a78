//! Unit types, combat-strength coefficients, and unit positions.
//!
//! The closed set of unit-type tags mirrors the force catalog of the
//! scenario data. Strength coefficients convert battalion counts into
//! comparable combat strength; types missing from a customized table
//! fall back to a neutral coefficient of 1.0.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The number of unit types in the catalog.
pub const UNIT_TYPE_COUNT: usize = 15;

/// Coefficient applied when a unit type is absent from the strength table.
pub const DEFAULT_STRENGTH: f64 = 1.0;

/// A unit-type tag from the scenario force catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Light,
    Medium,
    Heavy,
    Amphib,
    #[serde(rename = "SOF")]
    Sof,
    #[serde(rename = "Towed_Arty")]
    TowedArty,
    #[serde(rename = "SP_Arty")]
    SpArty,
    C2,
    Recon,
    #[serde(rename = "SHORAD")]
    Shorad,
    #[serde(rename = "Cargo_Handling")]
    CargoHandling,
    Engineer,
    Airborne,
    #[serde(rename = "Air_Assault")]
    AirAssault,
    #[serde(rename = "DOS")]
    Dos,
}

/// All unit types, in catalog order.
pub const ALL_UNIT_TYPES: [UnitType; UNIT_TYPE_COUNT] = [
    UnitType::Light,
    UnitType::Medium,
    UnitType::Heavy,
    UnitType::Amphib,
    UnitType::Sof,
    UnitType::TowedArty,
    UnitType::SpArty,
    UnitType::C2,
    UnitType::Recon,
    UnitType::Shorad,
    UnitType::CargoHandling,
    UnitType::Engineer,
    UnitType::Airborne,
    UnitType::AirAssault,
    UnitType::Dos,
];

impl UnitType {
    /// Returns the wire tag used by the order and roster data sources.
    pub const fn tag(self) -> &'static str {
        match self {
            UnitType::Light => "Light",
            UnitType::Medium => "Medium",
            UnitType::Heavy => "Heavy",
            UnitType::Amphib => "Amphib",
            UnitType::Sof => "SOF",
            UnitType::TowedArty => "Towed_Arty",
            UnitType::SpArty => "SP_Arty",
            UnitType::C2 => "C2",
            UnitType::Recon => "Recon",
            UnitType::Shorad => "SHORAD",
            UnitType::CargoHandling => "Cargo_Handling",
            UnitType::Engineer => "Engineer",
            UnitType::Airborne => "Airborne",
            UnitType::AirAssault => "Air_Assault",
            UnitType::Dos => "DOS",
        }
    }

    /// Parses a unit type from its wire tag.
    pub fn from_tag(tag: &str) -> Option<UnitType> {
        ALL_UNIT_TYPES.into_iter().find(|t| t.tag() == tag)
    }

    /// Returns true for artillery-role types, which fire-support
    /// evaluation counts at a 1.5x bonus.
    pub const fn is_artillery(self) -> bool {
        matches!(self, UnitType::TowedArty | UnitType::SpArty)
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a unit-type tag is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown unit type tag: {0}")]
pub struct UnitTypeParseError(pub String);

impl FromStr for UnitType {
    type Err = UnitTypeParseError;

    fn from_str(s: &str) -> Result<UnitType, UnitTypeParseError> {
        UnitType::from_tag(s).ok_or_else(|| UnitTypeParseError(s.to_string()))
    }
}

/// Per-type combat-strength coefficients.
///
/// The table is the explicit configuration object for strength lookups:
/// scenarios override entries, and absence falls back to
/// [`DEFAULT_STRENGTH`] through the one auditable lookup path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthTable {
    coefficients: HashMap<UnitType, f64>,
}

impl StrengthTable {
    /// Creates an empty table; every lookup then yields the default.
    pub fn empty() -> Self {
        StrengthTable { coefficients: HashMap::new() }
    }

    /// Sets the coefficient for a unit type.
    pub fn set(&mut self, unit_type: UnitType, coefficient: f64) {
        self.coefficients.insert(unit_type, coefficient);
    }

    /// Returns the coefficient for `unit_type`, or [`DEFAULT_STRENGTH`]
    /// when the type is absent from the table.
    pub fn coefficient_or_default(&self, unit_type: UnitType) -> f64 {
        self.coefficients
            .get(&unit_type)
            .copied()
            .unwrap_or(DEFAULT_STRENGTH)
    }

    /// Returns true if the table carries an entry for `unit_type`.
    pub fn contains(&self, unit_type: UnitType) -> bool {
        self.coefficients.contains_key(&unit_type)
    }
}

impl Default for StrengthTable {
    /// The baseline coefficients from the scenario data.
    fn default() -> Self {
        let coefficients = [
            (UnitType::Light, 1.0),
            (UnitType::Medium, 1.5),
            (UnitType::Heavy, 2.0),
            (UnitType::Amphib, 1.2),
            (UnitType::Sof, 1.8),
            (UnitType::TowedArty, 0.8),
            (UnitType::SpArty, 1.3),
            (UnitType::C2, 0.5),
            (UnitType::Recon, 0.7),
            (UnitType::Shorad, 0.9),
            (UnitType::CargoHandling, 0.3),
            (UnitType::Engineer, 1.1),
            (UnitType::Airborne, 1.3),
            (UnitType::AirAssault, 1.4),
            (UnitType::Dos, 0.2),
        ]
        .into_iter()
        .collect();
        StrengthTable { coefficients }
    }
}

/// A unit's current position, as supplied by the roster data source.
///
/// Read-only inside the engine; positions feed the export snapshot and
/// are available to the resolution stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitPosition {
    pub unit_id: String,
    pub unit_type: UnitType,
    #[serde(default)]
    pub count: u32,
    pub hex: String,
}
