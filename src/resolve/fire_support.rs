//! Fire-support evaluation.
//!
//! Converts each plan into an effectiveness percentage against its
//! declared target category. Artillery-role units count at a bonus;
//! base effectiveness caps at 90 before category weighting and the
//! final figure caps at 95. The battlefield is accepted for future
//! rules (counter-battery range, observed fires) but the current
//! formula reads none of it.

use std::collections::BTreeMap;

use crate::board::{Battlefield, StrengthTable};
use crate::orders::{FireSupportPlan, TargetCategory};

/// Multiplier applied to artillery-role units in a support strength sum.
pub const ARTILLERY_BONUS: f64 = 1.5;

/// Scale from support strength to base effectiveness percentage.
pub const STRENGTH_TO_PERCENT: f64 = 10.0;

/// Cap on base effectiveness before category weighting.
pub const BASE_EFFECTIVENESS_CAP: f64 = 90.0;

/// Cap on final effectiveness.
pub const EFFECTIVENESS_CAP: f64 = 95.0;

/// Effectiveness by plan id, in [0, 95].
///
/// Keyed as a sorted map so report and casualty output order is
/// deterministic. Duplicate plan ids overwrite: the last plan wins.
pub type EffectivenessMap = BTreeMap<String, f64>;

/// Support strength for one plan, with the artillery bonus applied.
pub fn support_strength(plan: &FireSupportPlan, strength: &StrengthTable) -> f64 {
    plan.supporting_units
        .iter()
        .map(|group| {
            let base = f64::from(group.count) * strength.coefficient_or_default(group.unit_type);
            if group.unit_type.is_artillery() {
                base * ARTILLERY_BONUS
            } else {
                base
            }
        })
        .sum()
}

/// Weight applied to base effectiveness for a target category.
pub fn category_weight(category: &TargetCategory) -> f64 {
    match category {
        TargetCategory::Maneuver => 1.0,
        TargetCategory::Artillery => 1.2,
        TargetCategory::Chokepoints => 0.8,
        TargetCategory::Infrastructure => 0.6,
        TargetCategory::Other(_) => 0.8,
    }
}

/// Evaluates every fire-support plan; one entry per distinct plan id.
pub fn evaluate_fire_support(
    plans: &[FireSupportPlan],
    _battlefield: &Battlefield,
    strength: &StrengthTable,
) -> EffectivenessMap {
    let mut effectiveness = EffectivenessMap::new();
    for plan in plans {
        let fs_strength = support_strength(plan, strength);
        let base = (fs_strength * STRENGTH_TO_PERCENT).min(BASE_EFFECTIVENESS_CAP);
        let weighted = base * category_weight(&plan.target_type);
        effectiveness.insert(plan.plan_id.clone(), weighted.min(EFFECTIVENESS_CAP));
    }
    effectiveness
}
