//! Game state for one run.
//!
//! ## GameState
//!
//! Everything the presentation layer renders after each call:
//! - Hero (HP, block, level, XP, statuses)
//! - Card piles (deck, hand, discard)
//! - Enemies in the current encounter
//! - Energy, kill count, pending reward, dungeon run
//!
//! A `GameState` is exclusively owned by its caller. Engine functions
//! mutate it in place through `&mut`; nothing is shared or global, so many
//! games can run side by side. The piles are persistent vectors, so cloning
//! a state for a snapshot is cheap.

use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use crate::cards::{Card, CardInstance, InstanceId};
use crate::combatants::{Hero, Monster};
use crate::dungeon::RunState;
use crate::zones::Zones;

/// Full state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub hero: Hero,

    /// Deck, hand and discard.
    pub zones: Zones,

    /// Enemies of the current encounter, in target-index order.
    pub enemies: Vec<Monster>,

    pub energy: u32,
    pub max_energy: u32,

    pub enemies_defeated: u32,

    /// Cards offered after a victory, if a draft is open.
    pub pending_reward: Option<Vec<Card>>,

    /// Dungeon run, once started.
    pub run: Option<RunState>,

    /// Tunables for this game.
    pub config: EngineConfig,

    next_instance_id: u32,
}

impl GameState {
    /// Create a state with empty piles and no enemies.
    ///
    /// `energy` and `max_energy` start at `config.starting_energy`.
    #[must_use]
    pub fn new(hero: Hero, config: EngineConfig) -> Self {
        Self {
            hero,
            zones: Zones::new(),
            enemies: Vec::new(),
            energy: config.starting_energy,
            max_energy: config.starting_energy,
            enemies_defeated: 0,
            pending_reward: None,
            run: None,
            config,
            next_instance_id: 0,
        }
    }

    // === Card Instances ===

    /// Allocate a fresh instance of `card`.
    ///
    /// The instance is not placed in any pile; the caller must do that.
    pub fn new_instance(&mut self, card: Card) -> CardInstance {
        let id = InstanceId(self.next_instance_id);
        self.next_instance_id += 1;
        CardInstance::new(id, card)
    }

    /// Cards across deck, hand and discard.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.zones.total()
    }

    // === Enemies ===

    /// Enemies with hp > 0.
    pub fn living_enemies(&self) -> impl Iterator<Item = &Monster> {
        self.enemies.iter().filter(|m| m.is_alive())
    }
}
