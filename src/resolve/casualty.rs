//! Casualty aggregation.
//!
//! Derives per-side casualty records from attack outcomes and
//! fire-support effectiveness. The current two-sided model charges
//! every record to Red: attack casualties fall on the attacking Red
//! force, and fire support is the Blue counter-fire program against it.

use serde::{Deserialize, Serialize};

use super::attack::AttackResult;
use super::fire_support::EffectivenessMap;

/// Battalion base used to convert a casualty ratio into a count.
pub const CASUALTY_BASE: f64 = 10.0;

/// Effectiveness percent per casualty inflicted by fire support.
pub const EFFECTIVENESS_PER_CASUALTY: f64 = 10.0;

/// Hex label for casualties not tied to a single hex.
pub const VARIOUS_HEXES: &str = "Various";

/// A side in the two-sided model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Blue,
}

/// The operation a casualty record traces back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "Ground_Attack")]
    GroundAttack,
    #[serde(rename = "Fire_Support")]
    FireSupport,
}

/// One side's casualties from one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasualtyRecord {
    pub side: Side,
    pub operation: Operation,
    /// Target hex for attacks; [`VARIOUS_HEXES`] for fire support.
    pub hex: String,
    pub casualties: u32,
    pub reason: String,
}

/// Derives casualty records from the attack and fire-support stages.
///
/// One record per attack result, then one per effectiveness entry in
/// plan-id order.
pub fn aggregate_casualties(
    attacks: &[AttackResult],
    effectiveness: &EffectivenessMap,
) -> Vec<CasualtyRecord> {
    let mut records = Vec::with_capacity(attacks.len() + effectiveness.len());

    for attack in attacks {
        records.push(CasualtyRecord {
            side: Side::Red,
            operation: Operation::GroundAttack,
            hex: attack.target_hex.clone(),
            casualties: (CASUALTY_BASE * attack.casualty_ratio).floor() as u32,
            reason: format!("Attack {}", attack.outcome.label()),
        });
    }

    for (plan_id, percent) in effectiveness {
        records.push(CasualtyRecord {
            side: Side::Red,
            operation: Operation::FireSupport,
            hex: VARIOUS_HEXES.to_string(),
            casualties: (percent / EFFECTIVENESS_PER_CASUALTY).floor() as u32,
            reason: format!("Fire support plan {plan_id}"),
        });
    }

    records
}
