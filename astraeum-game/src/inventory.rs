use serde::{Deserialize, Serialize};

const UNIT_HEALTH: i64 = 100;

/// Inventory payload from `GET /game/{id}/inventory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Inventory {
    #[serde(default)]
    pub weapons: Vec<String>,
    #[serde(default)]
    pub special_items: Vec<String>,
    #[serde(default)]
    pub potions: Vec<String>,
    #[serde(default)]
    pub armies: Vec<ArmyUnit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmyUnit {
    pub unit_name: String,
    pub quantity: u32,
    pub total_health: i64,
    #[serde(default)]
    pub morale: f32,
    #[serde(default)]
    pub experience_level: u32,
    #[serde(default)]
    pub is_deployed: bool,
}

impl ArmyUnit {
    /// Health ceiling for the roster display, each soldier contributing a
    /// fixed amount.
    #[must_use]
    pub const fn max_health(&self) -> i64 {
        self.quantity as i64 * UNIT_HEALTH
    }

    /// Morale rendered as a 0..=100 bar width.
    #[must_use]
    pub fn morale_percent(&self) -> f32 {
        (self.morale * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn army_unit_derived_figures() {
        let unit = ArmyUnit {
            unit_name: String::from("Hoplites"),
            quantity: 50,
            total_health: 4_200,
            morale: 0.85,
            experience_level: 2,
            is_deployed: true,
        };
        assert_eq!(unit.max_health(), 5_000);
        assert!((unit.morale_percent() - 85.0).abs() < f32::EPSILON);
    }

    #[test]
    fn morale_percent_is_clamped() {
        let unit = ArmyUnit {
            unit_name: String::from("Myrmidons"),
            quantity: 1,
            total_health: 100,
            morale: 1.4,
            experience_level: 1,
            is_deployed: false,
        };
        assert!((unit.morale_percent() - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn inventory_deserializes_with_missing_sections() {
        let inventory: Inventory =
            serde_json::from_str(r#"{"weapons": ["Mortal Spear"]}"#).expect("partial inventory");
        assert_eq!(inventory.weapons.len(), 1);
        assert!(inventory.armies.is_empty());
    }
}
