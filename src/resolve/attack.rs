//! Ground-attack resolution.
//!
//! Converts each attack order into a strength ratio and a graded
//! outcome. The defender has no independent strength source in this
//! model: defending strength is a uniform multiple of the attacker's
//! total, scaled by the target hex's terrain in the defender's favor.
//! Every intermediate value is retained on the result row for the
//! casualty and territory stages and for audit.

use serde::{Deserialize, Serialize};

use crate::board::{Battlefield, StrengthTable, Terrain, TerrainTable};
use crate::orders::{AttackOrder, UnitGroup};
use crate::rng::RandomSource;

/// Weight applied to fire-support strength in the attack total.
pub const FIRE_SUPPORT_WEIGHT: f64 = 0.5;

/// Floor for the defending strength in the ratio denominator.
pub const MIN_DEFENDING_STRENGTH: f64 = 0.1;

/// Ratio at or above which an attack succeeds outright.
pub const SUCCESS_RATIO: f64 = 2.0;

/// Ratio at or above which an attack partially succeeds with light losses.
pub const PARTIAL_HIGH_RATIO: f64 = 1.5;

/// Ratio at or above which an attack partially succeeds with heavier losses.
pub const PARTIAL_LOW_RATIO: f64 = 0.8;

/// The graded outcome of a ground attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    Success,
    Partial,
    Failure,
}

impl AttackOutcome {
    /// Returns the outcome label used in casualty reasons.
    pub const fn label(self) -> &'static str {
        match self {
            AttackOutcome::Success => "Success",
            AttackOutcome::Partial => "Partial",
            AttackOutcome::Failure => "Failure",
        }
    }
}

/// The outcome of one ground attack, with intermediates retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackResult {
    pub origin_hex: String,
    pub target_hex: String,
    pub attack_strength: f64,
    pub defending_strength: f64,
    pub strength_ratio: f64,
    pub outcome: AttackOutcome,
    pub casualty_ratio: f64,
    pub terrain: Terrain,
    pub fire_support_used: bool,
}

/// Sums `count x coefficient` over a unit list.
pub fn force_strength(units: &[UnitGroup], strength: &StrengthTable) -> f64 {
    units
        .iter()
        .map(|group| f64::from(group.count) * strength.coefficient_or_default(group.unit_type))
        .sum()
}

/// Classifies a strength ratio into an outcome and a casualty ratio.
///
/// Checked top down; the first matching threshold wins.
pub fn classify_ratio(ratio: f64) -> (AttackOutcome, f64) {
    if ratio >= SUCCESS_RATIO {
        (AttackOutcome::Success, 0.1)
    } else if ratio >= PARTIAL_HIGH_RATIO {
        (AttackOutcome::Partial, 0.2)
    } else if ratio >= PARTIAL_LOW_RATIO {
        (AttackOutcome::Partial, 0.3)
    } else {
        (AttackOutcome::Failure, 0.4)
    }
}

/// Resolves every attack order against the battlefield, in submission
/// order; one row per order. One uniform draw per attack sets the
/// defending multiplier in `[0.5, 1.5)`.
pub fn resolve_attacks(
    orders: &[AttackOrder],
    battlefield: &Battlefield,
    strength: &StrengthTable,
    modifiers: &TerrainTable,
    rng: &mut impl RandomSource,
) -> Vec<AttackResult> {
    orders
        .iter()
        .map(|order| resolve_one(order, battlefield, strength, modifiers, rng))
        .collect()
}

fn resolve_one(
    order: &AttackOrder,
    battlefield: &Battlefield,
    strength: &StrengthTable,
    modifiers: &TerrainTable,
    rng: &mut impl RandomSource,
) -> AttackResult {
    let attacking = force_strength(&order.attacking_bns, strength);
    let fire_support = force_strength(&order.fire_support, strength);
    let attack_strength = attacking + fire_support * FIRE_SUPPORT_WEIGHT;

    // Placeholder defender model: a uniform multiple of the attacker's
    // own total, with terrain favoring the defender.
    let terrain = battlefield.terrain_at(&order.target_hex);
    let terrain_mod = modifiers.modifier_or_default(terrain);
    let defending_strength = (0.5 + rng.uniform()) * attack_strength * terrain_mod;

    let strength_ratio = attack_strength / defending_strength.max(MIN_DEFENDING_STRENGTH);
    let (outcome, casualty_ratio) = classify_ratio(strength_ratio);

    AttackResult {
        origin_hex: order.origin_hex.clone(),
        target_hex: order.target_hex.clone(),
        attack_strength,
        defending_strength,
        strength_ratio,
        outcome,
        casualty_ratio,
        terrain,
        fire_support_used: !order.fire_support.is_empty(),
    }
}
