//! Monster templates and scaled monsters.

use serde::{Deserialize, Serialize};

use super::status::StatusMap;

/// Monster strength class. Drives scaling and XP reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Minion,
    Elite,
    Boss,
}

/// Unique identifier for a monster template.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonsterId(pub String);

impl MonsterId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MonsterId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unscaled monster definition from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub id: MonsterId,
    pub name: String,
    #[serde(rename = "type")]
    pub tier: Tier,
    pub hp: i32,
    pub attack: i32,
}

/// A monster scaled for a specific level.
///
/// Only built by `combat::scale_enemy_stats`; `level` and `base_hp` are set
/// there and never recomputed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub tier: Tier,
    pub hp: i32,
    /// Template HP before scaling, kept for HP-bar display.
    pub base_hp: i32,
    pub attack: i32,
    pub level: u32,
    pub status: StatusMap,
}

impl Monster {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_json() {
        let json = r#"{ "id": "orc_brute", "name": "Orc Brute", "type": "Elite", "hp": 45, "attack": 14 }"#;
        let t: MonsterTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, MonsterId::new("orc_brute"));
        assert_eq!(t.tier, Tier::Elite);
        assert_eq!(t.hp, 45);
    }

    #[test]
    fn test_unknown_tier_rejected() {
        let json = r#"{ "id": "x", "name": "X", "type": "Legend", "hp": 1, "attack": 1 }"#;
        assert!(serde_json::from_str::<MonsterTemplate>(json).is_err());
    }
}
