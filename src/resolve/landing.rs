//! Landing resolution.
//!
//! Resolves airborne and air-assault landing attempts independently,
//! one random success draw per order. Airborne drops divide their base
//! chance by the terrain modifier, so rough terrain is where they hold
//! their edge; air assaults insert at a flat rate regardless of
//! terrain. A failed attempt loses a random number of battalions.

use serde::{Deserialize, Serialize};

use crate::board::{HexMap, Terrain, TerrainTable, UnitType};
use crate::orders::{LandingKind, LandingOrder};
use crate::rng::RandomSource;

/// Base success chance for an airborne drop before the terrain divisor.
pub const AIRBORNE_BASE_CHANCE: f64 = 0.8;

/// Flat success chance for an air-assault insertion.
pub const AIR_ASSAULT_CHANCE: f64 = 0.85;

/// The outcome of one landing attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingResult {
    pub kind: LandingKind,
    pub hex: String,
    pub bn_type: UnitType,
    pub bns_attempted: u32,
    pub bns_landed: u32,
    pub success: bool,
    pub terrain: Terrain,
}

/// Resolves both landing lists against the terrain lookups.
///
/// Airborne orders resolve first, then air assaults, each in submission
/// order; one row per order.
pub fn resolve_landings(
    airborne: &[LandingOrder],
    air_assault: &[LandingOrder],
    terrain_map: &HexMap,
    modifiers: &TerrainTable,
    rng: &mut impl RandomSource,
) -> Vec<LandingResult> {
    let mut results = Vec::with_capacity(airborne.len() + air_assault.len());
    for order in airborne {
        results.push(resolve_one(order, LandingKind::Airborne, terrain_map, modifiers, rng));
    }
    for order in air_assault {
        results.push(resolve_one(order, LandingKind::AirAssault, terrain_map, modifiers, rng));
    }
    results
}

fn resolve_one(
    order: &LandingOrder,
    kind: LandingKind,
    terrain_map: &HexMap,
    modifiers: &TerrainTable,
    rng: &mut impl RandomSource,
) -> LandingResult {
    let terrain = terrain_map.terrain_or_open(&order.hex);
    let terrain_mod = modifiers.modifier_or_default(terrain);

    let success_chance = match kind {
        LandingKind::Airborne => AIRBORNE_BASE_CHANCE / terrain_mod,
        LandingKind::AirAssault => AIR_ASSAULT_CHANCE,
    };
    let success = rng.uniform() < success_chance;

    let bns_landed = if success {
        order.bn_count
    } else {
        let loss = match kind {
            LandingKind::Airborne => losses_airborne(order.bn_count, rng),
            LandingKind::AirAssault => losses_air_assault(order.bn_count, rng),
        };
        order.bn_count.saturating_sub(loss)
    };

    LandingResult {
        kind,
        hex: order.hex.clone(),
        bn_type: order.bn_type.unwrap_or_else(|| kind.default_bn_type()),
        bns_attempted: order.bn_count,
        bns_landed,
        success,
        terrain,
    }
}

/// A failed drop loses from 1 up to the full attempted count.
fn losses_airborne(bn_count: u32, rng: &mut impl RandomSource) -> u32 {
    rng.roll(1, bn_count.saturating_add(1))
}

/// A failed insertion loses from 1 up to half the attempted count.
fn losses_air_assault(bn_count: u32, rng: &mut impl RandomSource) -> u32 {
    rng.roll(1, (bn_count / 2).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    fn mountain_map() -> (HexMap, TerrainTable) {
        let mut map = HexMap::new();
        map.insert("A1", Terrain::Mountain);
        (map, TerrainTable::default())
    }

    #[test]
    fn airborne_success_lands_everyone() {
        let (map, modifiers) = mountain_map();
        let order = LandingOrder::new("A1", 4, UnitType::Airborne);
        // Mountain modifier 1.8 gives a 0.8 / 1.8 ~ 0.444 chance.
        let mut rng = ScriptedRandom::uniforms(vec![0.3]);
        let results = resolve_landings(&[order], &[], &map, &modifiers, &mut rng);
        assert_eq!(results.len(), 1);
        assert!(results[0].success);
        assert_eq!(results[0].bns_landed, 4);
        assert_eq!(results[0].bns_attempted, 4);
        assert_eq!(results[0].terrain, Terrain::Mountain);
    }

    #[test]
    fn airborne_failure_loses_battalions() {
        let (map, modifiers) = mountain_map();
        let order = LandingOrder::new("A1", 4, UnitType::Airborne);
        let mut rng = ScriptedRandom::new(vec![0.9], vec![3]);
        let results = resolve_landings(&[order], &[], &map, &modifiers, &mut rng);
        assert!(!results[0].success);
        assert_eq!(results[0].bns_landed, 1);
    }

    #[test]
    fn airborne_failure_can_lose_all() {
        let (map, modifiers) = mountain_map();
        let order = LandingOrder::new("A1", 4, UnitType::Airborne);
        let mut rng = ScriptedRandom::new(vec![0.9], vec![4]);
        let results = resolve_landings(&[order], &[], &map, &modifiers, &mut rng);
        assert_eq!(results[0].bns_landed, 0);
    }

    #[test]
    fn air_assault_ignores_terrain() {
        let (map, modifiers) = mountain_map();
        let order = LandingOrder::new("A1", 6, UnitType::AirAssault);
        // 0.5 is below the flat 0.85 chance even on mountain terrain.
        let mut rng = ScriptedRandom::uniforms(vec![0.5]);
        let results = resolve_landings(&[], &[order], &map, &modifiers, &mut rng);
        assert!(results[0].success);
        assert_eq!(results[0].bns_landed, 6);
        assert_eq!(results[0].kind, LandingKind::AirAssault);
    }

    #[test]
    fn air_assault_failure_loses_at_most_half() {
        let (map, modifiers) = mountain_map();
        let order = LandingOrder::new("A1", 6, UnitType::AirAssault);
        let mut rng = ScriptedRandom::new(vec![0.99], vec![99]);
        let results = resolve_landings(&[], &[order], &map, &modifiers, &mut rng);
        assert!(!results[0].success);
        // Loss rolls in [1, 3), so at least 4 of 6 land.
        assert!(results[0].bns_landed >= 4);
    }

    #[test]
    fn zero_count_failure_floors_at_zero() {
        let (map, modifiers) = mountain_map();
        let order = LandingOrder {
            hex: "A1".to_string(),
            bn_count: 0,
            bn_type: None,
        };
        let mut rng = ScriptedRandom::uniforms(vec![0.99]);
        let results = resolve_landings(&[order], &[], &map, &modifiers, &mut rng);
        assert_eq!(results[0].bns_landed, 0);
        assert_eq!(results[0].bn_type, UnitType::Airborne);
    }

    #[test]
    fn max_count_failure_does_not_overflow() {
        let (map, modifiers) = mountain_map();
        let order = LandingOrder::new("A1", u32::MAX, UnitType::Airborne);
        let mut rng = ScriptedRandom::new(vec![0.99], vec![u32::MAX]);
        let results = resolve_landings(&[order], &[], &map, &modifiers, &mut rng);
        assert!(!results[0].success);
        assert!(results[0].bns_landed <= results[0].bns_attempted);
    }

    #[test]
    fn unmapped_hex_defaults_to_open() {
        let map = HexMap::new();
        let modifiers = TerrainTable::default();
        let order = LandingOrder::new("Z9", 2, UnitType::Airborne);
        // Open modifier 1.0 leaves the full 0.8 base chance.
        let mut rng = ScriptedRandom::uniforms(vec![0.79]);
        let results = resolve_landings(&[order], &[], &map, &modifiers, &mut rng);
        assert!(results[0].success);
        assert_eq!(results[0].terrain, Terrain::Open);
    }

    #[test]
    fn landed_never_exceeds_attempted() {
        let (map, modifiers) = mountain_map();
        for roll in 1..=8 {
            let order = LandingOrder::new("A1", 8, UnitType::Airborne);
            let mut rng = ScriptedRandom::new(vec![0.95], vec![roll]);
            let results = resolve_landings(&[order], &[], &map, &modifiers, &mut rng);
            assert!(results[0].bns_landed <= results[0].bns_attempted);
        }
    }

    #[test]
    fn empty_orders_give_empty_results() {
        let (map, modifiers) = mountain_map();
        let mut rng = ScriptedRandom::default();
        let results = resolve_landings(&[], &[], &map, &modifiers, &mut rng);
        assert!(results.is_empty());
    }
}
