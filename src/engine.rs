//! Engine state and the six-stage resolution pipeline.
//!
//! Holds the static configuration tables and the random stream, and
//! runs one ground-operations resolution per call. The random stream is
//! consumed in a fixed order (landings, then attacks, each in
//! submission order), so a seeded engine replays a resolution exactly.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Battlefield, UnitType};
use crate::config::EngineConfig;
use crate::orders::{TurnOrders, UnitGroup};
use crate::resolve::{
    aggregate_casualties, evaluate_fire_support, resolve_attacks, resolve_landings,
    update_territory_control, validate_movements, ResolutionReport,
};
use crate::rng::RandomSource;

/// The ground-operations resolution engine.
///
/// Stateless across invocations apart from the configuration tables and
/// the position of the random stream.
pub struct GroundOpsEngine<R = SmallRng> {
    config: EngineConfig,
    rng: R,
}

impl GroundOpsEngine<SmallRng> {
    /// Creates an engine seeded from entropy.
    pub fn new(config: EngineConfig) -> Self {
        GroundOpsEngine {
            config,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an engine with a fixed seed for deterministic replay.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        GroundOpsEngine {
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R: RandomSource> GroundOpsEngine<R> {
    /// Creates an engine around an injected random source.
    pub fn with_random_source(config: EngineConfig, rng: R) -> Self {
        GroundOpsEngine { config, rng }
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves one ground-operations phase.
    ///
    /// Runs the six stages in fixed order and packages their outputs
    /// with summary counts and informational warnings.
    pub fn resolve(&mut self, orders: &TurnOrders, battlefield: &Battlefield) -> ResolutionReport {
        let mut report = ResolutionReport {
            warnings: self.collect_warnings(orders, battlefield),
            ..ResolutionReport::default()
        };

        report.landing_results = resolve_landings(
            &orders.airborne_landings,
            &orders.air_assault_landings,
            &battlefield.terrain,
            &self.config.terrain,
            &mut self.rng,
        );
        report.attack_results = resolve_attacks(
            &orders.ground_attacks,
            battlefield,
            &self.config.strength,
            &self.config.terrain,
            &mut self.rng,
        );
        report.movement_results = validate_movements(&orders.maneuver_movements);
        report.fire_support_effectiveness = evaluate_fire_support(
            &orders.fire_support_plans,
            battlefield,
            &self.config.strength,
        );

        report.casualties =
            aggregate_casualties(&report.attack_results, &report.fire_support_effectiveness);
        report.territory_control = update_territory_control(
            &report.landing_results,
            &report.attack_results,
            &report.movement_results,
        );

        report.tally(orders.landings_attempted(), orders.ground_attacks.len());
        report
    }

    /// Scans the submission for tags the configuration tables do not
    /// cover. The defaults still apply; these notes only make the
    /// defaulting visible.
    fn collect_warnings(&self, orders: &TurnOrders, battlefield: &Battlefield) -> Vec<String> {
        let mut warnings = BTreeSet::new();

        for order in orders
            .airborne_landings
            .iter()
            .chain(&orders.air_assault_landings)
        {
            if let Some(bn_type) = order.bn_type {
                self.check_unit(bn_type, &mut warnings);
            }
        }
        for attack in &orders.ground_attacks {
            self.check_groups(&attack.attacking_bns, &mut warnings);
            self.check_groups(&attack.fire_support, &mut warnings);
        }
        for plan in &orders.fire_support_plans {
            self.check_groups(&plan.supporting_units, &mut warnings);
        }

        let target_hexes = orders
            .airborne_landings
            .iter()
            .chain(&orders.air_assault_landings)
            .map(|order| order.hex.as_str())
            .chain(orders.ground_attacks.iter().map(|a| a.target_hex.as_str()));
        for hex in target_hexes {
            let terrain = battlefield.terrain_at(hex);
            if !self.config.terrain.contains(terrain) {
                warnings.insert(format!(
                    "no terrain modifier for {terrain}; defaulting to 1.0"
                ));
            }
        }

        warnings.into_iter().collect()
    }

    fn check_unit(&self, unit_type: UnitType, warnings: &mut BTreeSet<String>) {
        if !self.config.strength.contains(unit_type) {
            warnings.insert(format!(
                "no strength coefficient for {unit_type}; defaulting to 1.0"
            ));
        }
    }

    fn check_groups(&self, groups: &[UnitGroup], warnings: &mut BTreeSet<String>) {
        for group in groups {
            self.check_unit(group.unit_type, warnings);
        }
    }
}
