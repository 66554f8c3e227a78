//! Order types for the ground-operations phase.
//!
//! Represents the full player submission: airborne and air-assault
//! landings, ground attacks, maneuver movements, and fire-support
//! plans. Field names match the wire form of the order source exactly
//! so the external-resolver export stays lossless. Missing optional
//! fields deserialize to documented defaults and are never fatal; a
//! malformed order set (wrong types for required numeric fields) is the
//! one typed failure at this boundary.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::UnitType;

/// A (unit type, battalion count) pair in an attack or support list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitGroup {
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    #[serde(default)]
    pub count: u32,
}

impl UnitGroup {
    /// Creates a unit group.
    pub fn new(unit_type: UnitType, count: u32) -> Self {
        UnitGroup { unit_type, count }
    }
}

/// The kind of a landing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandingKind {
    Airborne,
    #[serde(rename = "Air_Assault")]
    AirAssault,
}

impl LandingKind {
    /// Returns the battalion type assumed when an order omits one.
    pub const fn default_bn_type(self) -> UnitType {
        match self {
            LandingKind::Airborne => UnitType::Airborne,
            LandingKind::AirAssault => UnitType::AirAssault,
        }
    }
}

impl fmt::Display for LandingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandingKind::Airborne => f.write_str("Airborne"),
            LandingKind::AirAssault => f.write_str("Air_Assault"),
        }
    }
}

/// An airborne or air-assault landing attempt against one hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingOrder {
    #[serde(default)]
    pub hex: String,
    #[serde(default)]
    pub bn_count: u32,
    /// Battalion type; when omitted, the landing kind's default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bn_type: Option<UnitType>,
}

impl LandingOrder {
    /// Creates a landing order with an explicit battalion type.
    pub fn new(hex: impl Into<String>, bn_count: u32, bn_type: UnitType) -> Self {
        LandingOrder {
            hex: hex.into(),
            bn_count,
            bn_type: Some(bn_type),
        }
    }
}

/// A ground attack from one hex against another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOrder {
    #[serde(default)]
    pub origin_hex: String,
    #[serde(default)]
    pub target_hex: String,
    /// The attacking force, by unit type.
    #[serde(default)]
    pub attacking_bns: Vec<UnitGroup>,
    /// Fire-support assets allocated to the attack, counted at half weight.
    #[serde(default)]
    pub fire_support: Vec<UnitGroup>,
}

/// A request to move a maneuver unit between troop organizations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementOrder {
    #[serde(default)]
    pub unit_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<UnitType>,
    #[serde(default)]
    pub unit_count: u32,
    /// Source troop-organization index.
    #[serde(default)]
    pub from_to: i32,
    /// Destination troop-organization index.
    #[serde(default)]
    pub to_to: i32,
}

/// The declared target category of a fire-support plan.
///
/// Unknown categories are preserved verbatim rather than rejected; they
/// weight the same as chokepoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetCategory {
    Maneuver,
    Artillery,
    Chokepoints,
    Infrastructure,
    Other(String),
}

impl From<String> for TargetCategory {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Maneuver" => TargetCategory::Maneuver,
            "Artillery" => TargetCategory::Artillery,
            "Chokepoints" => TargetCategory::Chokepoints,
            "Infrastructure" => TargetCategory::Infrastructure,
            _ => TargetCategory::Other(s),
        }
    }
}

impl From<TargetCategory> for String {
    fn from(category: TargetCategory) -> String {
        match category {
            TargetCategory::Maneuver => "Maneuver".to_string(),
            TargetCategory::Artillery => "Artillery".to_string(),
            TargetCategory::Chokepoints => "Chokepoints".to_string(),
            TargetCategory::Infrastructure => "Infrastructure".to_string(),
            TargetCategory::Other(s) => s,
        }
    }
}

impl Default for TargetCategory {
    /// The category assumed when a plan omits one; weights like an
    /// unrecognized category.
    fn default() -> Self {
        TargetCategory::Other("unknown".to_string())
    }
}

impl fmt::Display for TargetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetCategory::Maneuver => f.write_str("Maneuver"),
            TargetCategory::Artillery => f.write_str("Artillery"),
            TargetCategory::Chokepoints => f.write_str("Chokepoints"),
            TargetCategory::Infrastructure => f.write_str("Infrastructure"),
            TargetCategory::Other(s) => f.write_str(s),
        }
    }
}

fn default_plan_id() -> String {
    "unknown".to_string()
}

/// A fire-support allocation against one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireSupportPlan {
    /// Unique within one invocation; a later plan with the same id
    /// silently overwrites an earlier one in the effectiveness map.
    #[serde(default = "default_plan_id")]
    pub plan_id: String,
    #[serde(default)]
    pub supporting_units: Vec<UnitGroup>,
    #[serde(default)]
    pub target_hex: String,
    #[serde(default)]
    pub target_type: TargetCategory,
}

/// The complete order submission for one ground-operations phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnOrders {
    #[serde(default)]
    pub airborne_landings: Vec<LandingOrder>,
    #[serde(default)]
    pub air_assault_landings: Vec<LandingOrder>,
    #[serde(default)]
    pub ground_attacks: Vec<AttackOrder>,
    #[serde(default)]
    pub maneuver_movements: Vec<MovementOrder>,
    #[serde(default)]
    pub fire_support_plans: Vec<FireSupportPlan>,
    /// Battalion allocations ride along untouched for the external
    /// resolver; the core reads none of them.
    #[serde(default)]
    pub bn_allocations: Vec<serde_json::Value>,
}

/// Error returned when a raw order submission cannot be decoded.
#[derive(Debug, Error)]
#[error("malformed order set: {0}")]
pub struct OrderSetError(#[from] serde_json::Error);

impl TurnOrders {
    /// Creates an empty submission.
    pub fn new() -> Self {
        TurnOrders::default()
    }

    /// Decodes a raw JSON submission.
    ///
    /// Missing collections and missing optional fields default; a
    /// required field of the wrong type is the one fatal condition.
    pub fn from_json(json: &str) -> Result<TurnOrders, OrderSetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the total number of landing attempts in the submission.
    pub fn landings_attempted(&self) -> usize {
        self.airborne_landings.len() + self.air_assault_landings.len()
    }
}
