//! Movement validation.
//!
//! Movement legality is a pure function of the source and destination
//! troop-organization indices: the 3rd and 4th organizations cannot
//! exchange units, every other pair (including self-moves) is legal.
//! No randomness and no battlefield state are involved.

use serde::{Deserialize, Serialize};

use crate::board::UnitType;
use crate::orders::MovementOrder;

/// Reason string attached to a legal movement.
pub const REASON_COMPLETED: &str = "Movement completed";

/// Reason string attached to a restricted movement.
pub const REASON_RESTRICTED: &str = "Movement restricted";

/// The outcome of one movement request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementResult {
    pub unit_id: String,
    pub unit_type: Option<UnitType>,
    pub unit_count: u32,
    pub from_to: i32,
    pub to_to: i32,
    pub success: bool,
    pub reason: String,
}

/// Returns true unless the move crosses between organizations 3 and 4.
pub const fn movement_allowed(from_to: i32, to_to: i32) -> bool {
    !matches!((from_to, to_to), (3, 4) | (4, 3))
}

/// Validates every movement order; one row per order.
pub fn validate_movements(orders: &[MovementOrder]) -> Vec<MovementResult> {
    orders
        .iter()
        .map(|order| {
            let success = movement_allowed(order.from_to, order.to_to);
            MovementResult {
                unit_id: order.unit_id.clone(),
                unit_type: order.unit_type,
                unit_count: order.unit_count,
                from_to: order.from_to,
                to_to: order.to_to,
                success,
                reason: if success { REASON_COMPLETED } else { REASON_RESTRICTED }.to_string(),
            }
        })
        .collect()
}
