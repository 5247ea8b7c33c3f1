//! Game setup and the round cycle.
//!
//! `start_game` builds a fresh `GameState` from the catalog; `end_turn`
//! runs everything between two hero turns:
//!
//! ```text
//! resolve_defeated -> enemy_turn -> process_status_effects
//!                  -> resolve_defeated -> start_turn (if still fighting)
//! ```

use crate::cards::Catalog;
use crate::combat::{enemy_turn, outcome, process_status_effects, resolve_defeated, CombatOutcome};
use crate::combatants::Hero;
use crate::core::{EngineConfig, GameState, RandomSource, Result};
use crate::zones::{draw_to_hand_size, shuffle, start_turn};

/// Start a game with hero `hero_id`.
///
/// Every starting card is looked up before anything is built. The deck is
/// shuffled, the run difficulty is applied to the hero's HP, and the opening
/// hand is drawn. No enemies are present until a room is entered.
///
/// ## Errors
///
/// - `NotFound` for an unknown hero or starting-deck card
pub fn start_game<R: RandomSource>(
    catalog: &Catalog,
    hero_id: &str,
    config: EngineConfig,
    rng: &mut R,
) -> Result<GameState> {
    let template = catalog.hero(hero_id)?;
    let cards = template
        .starting_deck
        .iter()
        .map(|id| catalog.card(id.as_str()).cloned())
        .collect::<Result<Vec<_>>>()?;

    let mut hero = Hero::from_template(template, config.max_xp_for_level(0));
    let hp_percent = i64::from(config.difficulty.hero_hp_percent());
    hero.base_hp = i32::try_from(i64::from(hero.base_hp) * hp_percent / 100).unwrap_or(hero.base_hp);
    hero.hp = hero.base_hp;

    let mut state = GameState::new(hero, config);
    let instances: Vec<_> = cards.into_iter().map(|card| state.new_instance(card)).collect();
    state.zones.deck = shuffle(&instances, rng).into_iter().collect();

    let drawn = draw_to_hand_size(&mut state, rng);
    tracing::info!(
        hero = %state.hero.id,
        hp = state.hero.hp,
        deck = state.card_count(),
        drawn,
        difficulty = ?state.config.difficulty,
        "game started"
    );
    Ok(state)
}

/// End the hero's turn and play out the enemies' side of the round.
///
/// Enemies killed during the hero's turn are removed (and their XP awarded)
/// before anyone attacks. If the fight is still on after the status tick,
/// the next hero turn starts.
pub fn end_turn<R: RandomSource>(state: &mut GameState, rng: &mut R) -> CombatOutcome {
    resolve_defeated(state);
    let result = outcome(state);
    if result.is_over() {
        return result;
    }

    let dealt = enemy_turn(state);
    process_status_effects(state);
    resolve_defeated(state);

    let result = outcome(state);
    tracing::debug!(dealt, hero_hp = state.hero.hp, ?result, "round ended");
    if !result.is_over() {
        start_turn(state, rng);
    }
    result
}
