//! Resolution stages for the ground-operations phase.
//!
//! Six stages run in fixed order: landings, attacks, movement
//! validation, fire-support evaluation, casualty aggregation, and
//! territory control. Stages 1-4 are independent; stage 5 reads the
//! attack and fire-support outputs, stage 6 the landing, attack, and
//! movement outputs.

pub mod attack;
pub mod casualty;
pub mod fire_support;
pub mod landing;
pub mod movement;
pub mod report;
pub mod territory;

pub use attack::{
    classify_ratio, force_strength, resolve_attacks, AttackOutcome, AttackResult,
    FIRE_SUPPORT_WEIGHT, MIN_DEFENDING_STRENGTH, PARTIAL_HIGH_RATIO, PARTIAL_LOW_RATIO,
    SUCCESS_RATIO,
};
pub use casualty::{
    aggregate_casualties, CasualtyRecord, Operation, Side, CASUALTY_BASE, VARIOUS_HEXES,
};
pub use fire_support::{
    category_weight, evaluate_fire_support, support_strength, EffectivenessMap, ARTILLERY_BONUS,
    BASE_EFFECTIVENESS_CAP, EFFECTIVENESS_CAP,
};
pub use landing::{
    resolve_landings, LandingResult, AIRBORNE_BASE_CHANCE, AIR_ASSAULT_CHANCE,
};
pub use movement::{
    movement_allowed, validate_movements, MovementResult, REASON_COMPLETED, REASON_RESTRICTED,
};
pub use report::ResolutionReport;
pub use territory::{update_territory_control, Control, TerritoryRecord};
