use criterion::{black_box, criterion_group, criterion_main, Criterion};

use groundops::board::{Battlefield, HexMap, Terrain, UnitType};
use groundops::engine::GroundOpsEngine;
use groundops::orders::{
    AttackOrder, FireSupportPlan, LandingOrder, MovementOrder, TargetCategory, TurnOrders,
    UnitGroup,
};
use groundops::EngineConfig;

/// A realistic submission: a dozen landings, attacks, moves, and plans.
fn full_submission() -> (TurnOrders, Battlefield) {
    let mut orders = TurnOrders::new();
    let mut terrain = HexMap::new();
    let terrains = [
        Terrain::Urban,
        Terrain::Forest,
        Terrain::Mountain,
        Terrain::Coastal,
        Terrain::Open,
    ];

    for i in 0..12 {
        let hex = format!("H{i}");
        terrain.insert(hex.clone(), terrains[i % terrains.len()]);
        orders
            .airborne_landings
            .push(LandingOrder::new(hex.clone(), 4, UnitType::Airborne));
        orders
            .air_assault_landings
            .push(LandingOrder::new(hex.clone(), 3, UnitType::AirAssault));
        orders.ground_attacks.push(AttackOrder {
            origin_hex: format!("H{}", (i + 1) % 12),
            target_hex: hex.clone(),
            attacking_bns: vec![
                UnitGroup::new(UnitType::Heavy, 3),
                UnitGroup::new(UnitType::Light, 2),
            ],
            fire_support: vec![UnitGroup::new(UnitType::SpArty, 1)],
        });
        orders.maneuver_movements.push(MovementOrder {
            unit_id: format!("G-{i}"),
            unit_type: Some(UnitType::Medium),
            unit_count: 2,
            from_to: (i % 5) as i32,
            to_to: ((i + 1) % 5) as i32,
        });
        orders.fire_support_plans.push(FireSupportPlan {
            plan_id: format!("FS-{i}"),
            supporting_units: vec![UnitGroup::new(UnitType::TowedArty, 2)],
            target_hex: hex,
            target_type: TargetCategory::Maneuver,
        });
    }

    (orders, Battlefield::with_data(terrain, Vec::new()))
}

fn bench_resolve_full(c: &mut Criterion) {
    let (orders, battlefield) = full_submission();
    c.bench_function("resolve_full_submission", |b| {
        let mut engine = GroundOpsEngine::with_seed(EngineConfig::default(), 42);
        b.iter(|| engine.resolve(black_box(&orders), black_box(&battlefield)))
    });
}

fn bench_resolve_empty(c: &mut Criterion) {
    let orders = TurnOrders::new();
    let battlefield = Battlefield::new();
    c.bench_function("resolve_empty_submission", |b| {
        let mut engine = GroundOpsEngine::with_seed(EngineConfig::default(), 42);
        b.iter(|| engine.resolve(black_box(&orders), black_box(&battlefield)))
    });
}

criterion_group!(benches, bench_resolve_full, bench_resolve_empty);
criterion_main!(benches);
