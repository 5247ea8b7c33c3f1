//! Hero templates and the runtime hero.

use serde::{Deserialize, Serialize};

use super::status::StatusMap;
use crate::cards::CardId;

/// Unique identifier for a hero template.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroId(pub String);

impl HeroId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HeroId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static hero definition from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroTemplate {
    pub id: HeroId,
    pub name: String,
    pub class: String,
    #[serde(rename = "baseHP")]
    pub base_hp: i32,
    pub hand_size: usize,
    /// Card ids, duplicates allowed.
    pub starting_deck: Vec<CardId>,
    /// Flavor only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
}

/// The hero during a run.
///
/// `hp` may drop to 0 or below; the engine never clamps it from below and
/// defeat is detected by the caller (see `combat::outcome`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub class: String,
    /// Max HP. Grows on level-up.
    pub base_hp: i32,
    pub hp: i32,
    /// Reset to 0 at the start of every turn; additive mid-turn.
    pub block: i32,
    pub level: u32,
    pub xp: u32,
    /// XP needed for the next level.
    pub max_xp: u32,
    /// Draws stop once the hand holds this many cards.
    pub hand_size: usize,
    pub status: StatusMap,
}

impl Hero {
    /// Fresh level-1 hero from a template.
    #[must_use]
    pub fn from_template(template: &HeroTemplate, max_xp: u32) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            class: template.class.clone(),
            base_hp: template.base_hp,
            hp: template.base_hp,
            block: 0,
            level: 1,
            xp: 0,
            max_xp,
            hand_size: template.hand_size,
            status: StatusMap::new(),
        }
    }

    /// Restore HP, never above `base_hp`.
    pub fn heal(&mut self, amount: i32) {
        self.hp = self.base_hp.min(self.hp.saturating_add(amount));
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}
