//! Ground-operations resolution engine.
//!
//! Resolves one "ground operations" phase of a turn-based wargame:
//! airborne and air-assault landings, ground attacks, maneuver
//! movements, and fire-support plans, aggregated into casualties and
//! territory control. One invocation is a pure transformation of
//! orders plus battlefield data, apart from a single injectable random
//! stream.

pub mod board;
pub mod config;
pub mod engine;
pub mod export;
pub mod orders;
pub mod resolve;
pub mod rng;

pub use config::EngineConfig;
pub use engine::GroundOpsEngine;
