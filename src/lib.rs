//! # undercrypt
//!
//! Turn-based card-combat engine for a dungeon-crawling deck builder.
//!
//! A hero with a deck of cards fights enemies room by room: energy-gated
//! card plays, block, damage, healing, stacking status effects, enemy
//! scaling by level and tier, XP and level-ups, and procedurally generated
//! dungeon floors.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: a `GameState` belongs to its caller. Engine functions
//!    mutate it through `&mut` and keep nothing global, so any number of
//!    games can run side by side.
//!
//! 2. **Validate, Then Mutate**: every fallible operation checks its input
//!    first. An `Err` means the state was not touched.
//!
//! 3. **Injected Randomness**: shuffles, drafts and room layouts take a
//!    `RandomSource`. `GameRng` is seedable; tests script exact rolls.
//!
//! 4. **Closed Vocabularies**: effects and statuses are enums, matched
//!    exhaustively by the resolver, the status tick and the enemy AI.
//!
//! ## Usage
//!
//! ```
//! use undercrypt::{
//!     end_turn, enter_room, start_game, start_run, Catalog, EffectResolver,
//!     EngineConfig, GameRng,
//! };
//!
//! let catalog = Catalog::builtin()?;
//! let mut rng = GameRng::new(7);
//! let mut state = start_game(&catalog, "knight_of_ashes", EngineConfig::default(), &mut rng)?;
//!
//! start_run(&mut state, &catalog, &mut rng);
//! enter_room(&mut state, 0, &mut rng)?;
//!
//! while EffectResolver::can_play(&state, 0) {
//!     EffectResolver::play_card(&mut state, 0, 0, &mut rng)?;
//! }
//! let outcome = end_turn(&mut state, &mut rng);
//! # let _ = outcome;
//! # Ok::<(), undercrypt::EngineError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: game state, configuration, errors, RNG
//! - `cards`: card definitions, instances, and the catalog
//! - `combatants`: hero, monsters, status maps
//! - `zones`: deck/hand/discard and the draw cycle
//! - `effects`: card effects and the resolver
//! - `combat`: enemy scaling, enemy AI, status ticks, kill resolution
//! - `progression`: XP and level-ups
//! - `dungeon`: floor generation and run progress
//! - `rewards`: post-combat card drafts
//! - `game`: game setup and the round cycle

pub mod core;
pub mod cards;
pub mod combatants;
pub mod zones;
pub mod effects;
pub mod combat;
pub mod progression;
pub mod dungeon;
pub mod rewards;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CatalogKind, Difficulty, EngineConfig, EngineError, GameRng, GameState, RandomSource,
    Result, ScalingConfig, ScriptedRng, TierTable,
};

pub use crate::cards::{Card, CardCategory, CardId, CardInstance, Catalog, InstanceId, Rarity};

pub use crate::combatants::{
    Hero, HeroId, HeroTemplate, Monster, MonsterId, MonsterTemplate, StatusKind, StatusMap, Tier,
};

pub use crate::zones::{draw_cards, draw_to_hand_size, shuffle, start_turn, Pile, Zones};

pub use crate::effects::{DamageTarget, Effect, EffectResolver, ResolveResult, StatusTarget};

pub use crate::combat::{
    enemy_turn, outcome, process_status_effects, resolve_defeated, scale_enemy_stats,
    CombatOutcome, DefeatReport,
};

pub use crate::progression::{award_enemy_xp, enemy_xp, gain_xp};

pub use crate::dungeon::{
    advance_floor, complete_room, enter_room, generate_dungeon_rooms, start_run, Room, RoomKind,
    RunState,
};

pub use crate::rewards::{choose_reward, draft_rewards, skip_reward};

pub use crate::game::{end_turn, start_game};
