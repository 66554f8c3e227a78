//! Export snapshot for the external resolver.
//!
//! When a match designates an independently implemented resolver as the
//! authority of record, the same raw orders and current unit positions
//! are handed over verbatim: every order field serializes under its
//! original wire name with no lossy transformation, plus a snapshot
//! timestamp.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::board::UnitPosition;
use crate::orders::{AttackOrder, FireSupportPlan, LandingOrder, MovementOrder, TurnOrders};

/// Error returned when a snapshot cannot be serialized.
#[derive(Debug, Error)]
#[error("failed to serialize export snapshot: {0}")]
pub struct ExportError(#[from] serde_json::Error);

/// The attacking side's operations, grouped as the external resolver
/// expects them.
#[derive(Debug, Serialize)]
pub struct RedOperations<'a> {
    pub airborne_landings: &'a [LandingOrder],
    pub air_assault_landings: &'a [LandingOrder],
    pub ground_attacks: &'a [AttackOrder],
}

/// The defending side's operations.
#[derive(Debug, Serialize)]
pub struct BlueOperations<'a> {
    pub maneuver_movements: &'a [MovementOrder],
    pub fire_support_plans: &'a [FireSupportPlan],
    pub bn_allocations: &'a [serde_json::Value],
}

/// One complete hand-off to the external resolver.
#[derive(Debug, Serialize)]
pub struct ExportSnapshot<'a> {
    pub red_operations: RedOperations<'a>,
    pub blue_operations: BlueOperations<'a>,
    pub current_unit_positions: &'a [UnitPosition],
    /// RFC 3339 capture time.
    pub timestamp: String,
}

impl<'a> ExportSnapshot<'a> {
    /// Builds a snapshot stamped with the given capture time.
    pub fn at(
        orders: &'a TurnOrders,
        positions: &'a [UnitPosition],
        captured: DateTime<Utc>,
    ) -> Self {
        ExportSnapshot {
            red_operations: RedOperations {
                airborne_landings: &orders.airborne_landings,
                air_assault_landings: &orders.air_assault_landings,
                ground_attacks: &orders.ground_attacks,
            },
            blue_operations: BlueOperations {
                maneuver_movements: &orders.maneuver_movements,
                fire_support_plans: &orders.fire_support_plans,
                bn_allocations: &orders.bn_allocations,
            },
            current_unit_positions: positions,
            timestamp: captured.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Builds a snapshot stamped with the current time.
    pub fn now(orders: &'a TurnOrders, positions: &'a [UnitPosition]) -> Self {
        ExportSnapshot::at(orders, positions, Utc::now())
    }

    /// Serializes the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
