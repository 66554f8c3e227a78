//! The resolution report.
//!
//! Bundles every stage's output plus summary counts and informational
//! warnings for the reporting layer.

use serde::{Deserialize, Serialize};

use super::attack::{AttackOutcome, AttackResult};
use super::casualty::CasualtyRecord;
use super::fire_support::EffectivenessMap;
use super::landing::LandingResult;
use super::movement::MovementResult;
use super::territory::TerritoryRecord;

/// Everything one ground-operations resolution produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolutionReport {
    pub landing_results: Vec<LandingResult>,
    pub attack_results: Vec<AttackResult>,
    pub movement_results: Vec<MovementResult>,
    pub fire_support_effectiveness: EffectivenessMap,
    pub casualties: Vec<CasualtyRecord>,
    pub territory_control: Vec<TerritoryRecord>,
    pub landings_attempted: usize,
    pub landings_successful: usize,
    pub attacks_attempted: usize,
    pub attacks_successful: usize,
    /// Informational notes (unknown tags, defaulted lookups); never
    /// affect outcomes.
    pub warnings: Vec<String>,
}

impl ResolutionReport {
    /// Recomputes the summary counts from the result collections.
    pub(crate) fn tally(&mut self, landings_attempted: usize, attacks_attempted: usize) {
        self.landings_attempted = landings_attempted;
        self.landings_successful = self.landing_results.iter().filter(|l| l.success).count();
        self.attacks_attempted = attacks_attempted;
        self.attacks_successful = self
            .attack_results
            .iter()
            .filter(|a| a.outcome == AttackOutcome::Success)
            .count();
    }
}
