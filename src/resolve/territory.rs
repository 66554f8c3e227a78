//! Territory-control derivation.
//!
//! Emits hex control records from successful landings and from
//! successful or partial attacks. Records are append-only: a hex
//! claimed by several operations in the same resolution keeps every
//! record, with no merge step. Movement results are accepted for
//! completeness but feed no rule yet.

use serde::{Deserialize, Serialize};

use super::attack::{AttackOutcome, AttackResult};
use super::landing::LandingResult;
use super::movement::MovementResult;

/// The controlling claim on a hex.
///
/// The two-sided model only ever produces Red claims; a partial attack
/// leaves the hex contested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    Red,
    Contested,
}

/// One control claim on one hex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerritoryRecord {
    pub hex: String,
    pub control: Control,
    pub strength: f64,
    pub source: String,
}

/// Derives control records from the landing, attack, and movement
/// stages. Failed landings and failed attacks emit nothing.
pub fn update_territory_control(
    landings: &[LandingResult],
    attacks: &[AttackResult],
    _movements: &[MovementResult],
) -> Vec<TerritoryRecord> {
    let mut records = Vec::new();

    for landing in landings.iter().filter(|l| l.success) {
        records.push(TerritoryRecord {
            hex: landing.hex.clone(),
            control: Control::Red,
            strength: f64::from(landing.bns_landed),
            source: format!("{} Landing", landing.kind),
        });
    }

    for attack in attacks {
        match attack.outcome {
            AttackOutcome::Success => records.push(TerritoryRecord {
                hex: attack.target_hex.clone(),
                control: Control::Red,
                strength: attack.attack_strength,
                source: "Ground Attack".to_string(),
            }),
            AttackOutcome::Partial => records.push(TerritoryRecord {
                hex: attack.target_hex.clone(),
                control: Control::Contested,
                strength: attack.attack_strength / 2.0,
                source: "Partial Attack".to_string(),
            }),
            AttackOutcome::Failure => {}
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Terrain, UnitType};
    use crate::orders::LandingKind;

    fn landing(success: bool, landed: u32) -> LandingResult {
        LandingResult {
            kind: LandingKind::Airborne,
            hex: "A1".to_string(),
            bn_type: UnitType::Airborne,
            bns_attempted: 4,
            bns_landed: landed,
            success,
            terrain: Terrain::Open,
        }
    }

    fn attack(outcome: AttackOutcome) -> AttackResult {
        AttackResult {
            origin_hex: "A1".to_string(),
            target_hex: "B2".to_string(),
            attack_strength: 12.0,
            defending_strength: 5.0,
            strength_ratio: 2.4,
            outcome,
            casualty_ratio: 0.1,
            terrain: Terrain::Open,
            fire_support_used: false,
        }
    }

    #[test]
    fn successful_landing_claims_the_hex() {
        let records = update_territory_control(&[landing(true, 4)], &[], &[]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hex, "A1");
        assert_eq!(records[0].control, Control::Red);
        assert_eq!(records[0].strength, 4.0);
        assert_eq!(records[0].source, "Airborne Landing");
    }

    #[test]
    fn failed_landing_claims_nothing() {
        let records = update_territory_control(&[landing(false, 1)], &[], &[]);
        assert!(records.is_empty());
    }

    #[test]
    fn successful_attack_claims_at_full_strength() {
        let records = update_territory_control(&[], &[attack(AttackOutcome::Success)], &[]);
        assert_eq!(records[0].control, Control::Red);
        assert_eq!(records[0].strength, 12.0);
        assert_eq!(records[0].source, "Ground Attack");
    }

    #[test]
    fn partial_attack_contests_at_half_strength() {
        let records = update_territory_control(&[], &[attack(AttackOutcome::Partial)], &[]);
        assert_eq!(records[0].control, Control::Contested);
        assert_eq!(records[0].strength, 6.0);
        assert_eq!(records[0].source, "Partial Attack");
    }

    #[test]
    fn failed_attack_claims_nothing() {
        let records = update_territory_control(&[], &[attack(AttackOutcome::Failure)], &[]);
        assert!(records.is_empty());
    }

    #[test]
    fn air_assault_landing_is_labeled() {
        let mut l = landing(true, 3);
        l.kind = LandingKind::AirAssault;
        let records = update_territory_control(&[l], &[], &[]);
        assert_eq!(records[0].source, "Air_Assault Landing");
    }

    #[test]
    fn claims_on_one_hex_append() {
        let mut l = landing(true, 2);
        l.hex = "B2".to_string();
        let records = update_territory_control(&[l], &[attack(AttackOutcome::Partial)], &[]);
        // Both claims survive; no merge step exists.
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.hex == "B2"));
    }
}
