//! Engine configuration.
//!
//! The strength and terrain tables are passed in explicitly at engine
//! construction so scenarios can override coefficients and tests can
//! pin them; there is no hidden global table.

use serde::{Deserialize, Serialize};

use crate::board::{StrengthTable, TerrainTable};

/// The static configuration for a resolution engine.
///
/// Read-only for the lifetime of every invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Combat-strength coefficient by unit type.
    pub strength: StrengthTable,
    /// Difficulty multiplier by terrain category.
    pub terrain: TerrainTable,
}

impl EngineConfig {
    /// Creates a configuration from explicit tables.
    pub fn new(strength: StrengthTable, terrain: TerrainTable) -> Self {
        EngineConfig { strength, terrain }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Terrain, UnitType};

    #[test]
    fn default_config_carries_baseline_tables() {
        let config = EngineConfig::default();
        assert_eq!(config.strength.coefficient_or_default(UnitType::Sof), 1.8);
        assert_eq!(config.terrain.modifier_or_default(Terrain::Forest), 1.2);
    }

    #[test]
    fn overrides_are_per_instance() {
        let mut config = EngineConfig::default();
        config.strength.set(UnitType::Heavy, 3.0);
        assert_eq!(config.strength.coefficient_or_default(UnitType::Heavy), 3.0);

        let fresh = EngineConfig::default();
        assert_eq!(fresh.strength.coefficient_or_default(UnitType::Heavy), 2.0);
    }
}
