//! Engine configuration.
//!
//! Every tunable of the combat and progression rules lives here:
//! - `ScalingConfig`: enemy HP/attack growth per hero level and tier
//! - `Difficulty`: run-wide hero HP / enemy attack multipliers
//! - `EngineConfig`: combines all configuration
//!
//! Defaults reproduce the standard ruleset. A `GameState` owns a copy so
//! all operations on one game read the same values.

use serde::{Deserialize, Serialize};

use crate::combatants::Tier;
use crate::core::error::Result;

/// One value per monster tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTable<T> {
    pub minion: T,
    pub elite: T,
    pub boss: T,
}

impl<T: Copy> TierTable<T> {
    /// Value for a tier.
    #[must_use]
    pub fn get(&self, tier: Tier) -> T {
        match tier {
            Tier::Minion => self.minion,
            Tier::Elite => self.elite,
            Tier::Boss => self.boss,
        }
    }
}

/// How monster templates scale with the hero's level.
///
/// All rates are integer percentages so floors are exact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingConfig {
    /// HP growth per level above 1 (8 = +8%).
    pub hp_percent_per_level: u32,
    /// Attack growth per level above 1.
    pub attack_percent_per_level: u32,
    /// Extra multiplier applied to both stats by tier (140 = x1.4).
    pub tier_percent: TierTable<u32>,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            hp_percent_per_level: 8,
            attack_percent_per_level: 5,
            tier_percent: TierTable {
                minion: 100,
                elite: 140,
                boss: 180,
            },
        }
    }
}

/// Run difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Hero starting HP, in percent.
    #[must_use]
    pub fn hero_hp_percent(self) -> u32 {
        match self {
            Difficulty::Easy => 120,
            Difficulty::Normal => 100,
            Difficulty::Hard => 80,
        }
    }

    /// Spawned enemies' attack, in percent.
    #[must_use]
    pub fn enemy_attack_percent(self) -> u32 {
        match self {
            Difficulty::Easy => 80,
            Difficulty::Normal => 100,
            Difficulty::Hard => 120,
        }
    }
}

/// Complete engine configuration.
///
/// ## Example
///
/// ```
/// use undercrypt::core::{Difficulty, EngineConfig};
///
/// let config = EngineConfig::default()
///     .with_difficulty(Difficulty::Hard)
///     .with_reward_choices(4);
///
/// assert_eq!(config.starting_energy, 3);
/// assert_eq!(config.reward_choices, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Energy at the start of a game.
    pub starting_energy: u32,
    /// Max energy never grows past this.
    pub max_energy_cap: u32,

    /// Hard level cap.
    pub level_cap: u32,
    /// XP curve: `max_xp = floor(xp_base * (xp_growth_percent / 100)^level)`.
    pub xp_base: u32,
    pub xp_growth_percent: u32,
    /// Max HP growth on level-up, in percent.
    pub level_hp_growth_percent: u32,
    /// Heal on level-up, in percent of the new max HP.
    pub level_heal_percent: u32,

    pub scaling: ScalingConfig,

    /// Base XP per kill by tier.
    pub xp_reward: TierTable<u32>,
    /// XP bonus per enemy level above 1, in percent.
    pub xp_percent_per_enemy_level: u32,

    /// Burn deals `stacks * burn_multiplier` per tick.
    pub burn_multiplier: u32,
    /// A chilled enemy hits for this percent of its attack (floored).
    pub chill_attack_percent: u32,

    /// Cards offered per reward draft.
    pub reward_choices: usize,
    /// Rooms generated per dungeon floor.
    pub rooms_per_floor: usize,

    pub difficulty: Difficulty,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_energy: 3,
            max_energy_cap: 8,
            level_cap: 10,
            xp_base: 100,
            xp_growth_percent: 120,
            level_hp_growth_percent: 10,
            level_heal_percent: 10,
            scaling: ScalingConfig::default(),
            xp_reward: TierTable {
                minion: 20,
                elite: 45,
                boss: 120,
            },
            xp_percent_per_enemy_level: 5,
            burn_multiplier: 2,
            chill_attack_percent: 70,
            reward_choices: 3,
            rooms_per_floor: 6,
            difficulty: Difficulty::Normal,
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON config; missing keys keep defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// XP required to clear `level`.
    #[must_use]
    pub fn max_xp_for_level(&self, level: u32) -> u32 {
        let num = u128::from(self.xp_growth_percent).checked_pow(level);
        let den = 100u128.checked_pow(level);
        match (num, den) {
            (Some(num), Some(den)) => {
                let xp = u128::from(self.xp_base) * num / den;
                u32::try_from(xp).unwrap_or(u32::MAX)
            }
            _ => u32::MAX,
        }
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_starting_energy(mut self, energy: u32) -> Self {
        self.starting_energy = energy;
        self
    }

    #[must_use]
    pub fn with_reward_choices(mut self, count: usize) -> Self {
        self.reward_choices = count;
        self
    }

    #[must_use]
    pub fn with_rooms_per_floor(mut self, count: usize) -> Self {
        self.rooms_per_floor = count;
        self
    }
}
