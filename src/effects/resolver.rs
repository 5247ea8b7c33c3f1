//! Effect resolution - playing cards against the game state.
//!
//! `EffectResolver::play_card` validates a play, pays its cost, runs the
//! card's effects in order and discards it. Validation happens before any
//! mutation, so an `Err` always leaves the state exactly as it was.

use crate::cards::InstanceId;
use crate::combatants::Monster;
use crate::core::{EngineError, GameState, RandomSource, Result};
use crate::zones::draw_cards;

use super::effect::{DamageTarget, Effect, StatusTarget};

/// Result of resolving one effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Effect fully applied.
    Success,
    /// Single target index did not name an enemy; nothing happened.
    NoTarget,
    /// Draw stopped early (hand full or no cards left).
    Partial { requested: u32, applied: u32 },
}

/// Resolves card plays and effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Check whether the card at `hand_index` can be played right now.
    #[must_use]
    pub fn can_play(state: &GameState, hand_index: usize) -> bool {
        state
            .zones
            .hand
            .get(hand_index)
            .is_some_and(|card| card.cost() <= state.energy)
    }

    /// Play the card at `hand_index`, aiming single-target effects at
    /// `target_index`.
    ///
    /// ## Errors
    ///
    /// - `InvalidSelection` if the hand has no card at `hand_index`
    /// - `InsufficientEnergy` if the card costs more than current energy
    ///
    /// On success returns the played instance, now on top of the discard.
    pub fn play_card<R: RandomSource>(
        state: &mut GameState,
        hand_index: usize,
        target_index: usize,
        rng: &mut R,
    ) -> Result<InstanceId> {
        let Some(card) = state.zones.hand.get(hand_index) else {
            return Err(EngineError::InvalidSelection {
                index: hand_index,
                len: state.zones.hand.len(),
            });
        };
        let cost = card.cost();
        if cost > state.energy {
            return Err(EngineError::InsufficientEnergy {
                cost,
                available: state.energy,
            });
        }

        let id = card.id;
        let effects = card.card.effects.clone();
        tracing::debug!(
            card = %card.card_id(),
            instance = %id,
            cost,
            target = target_index,
            "playing card"
        );
        state.energy -= cost;

        // The card stays in hand until every effect has resolved.
        for effect in &effects {
            let result = Self::resolve(state, effect, target_index, rng);
            if result != ResolveResult::Success {
                tracing::trace!(?effect, ?result, "effect not fully applied");
            }
        }

        match state.zones.remove_from_hand(id) {
            Some(card) => state.zones.discard(card),
            None => tracing::warn!(instance = %id, "played card left the hand during resolution"),
        }
        Ok(id)
    }

    /// Resolve a single effect.
    ///
    /// Out-of-range targets are a silent no-op for that effect only.
    pub fn resolve<R: RandomSource>(
        state: &mut GameState,
        effect: &Effect,
        target_index: usize,
        rng: &mut R,
    ) -> ResolveResult {
        match *effect {
            Effect::Damage { value, target } => {
                let amount = clamp_i32(value);
                match target {
                    DamageTarget::Enemy => match state.enemies.get_mut(target_index) {
                        Some(enemy) => {
                            damage_monster(enemy, amount);
                            ResolveResult::Success
                        }
                        None => ResolveResult::NoTarget,
                    },
                    DamageTarget::AllEnemies => {
                        for enemy in &mut state.enemies {
                            damage_monster(enemy, amount);
                        }
                        ResolveResult::Success
                    }
                    DamageTarget::Hero => {
                        state.hero.hp = state.hero.hp.saturating_sub(amount);
                        ResolveResult::Success
                    }
                }
            }

            Effect::Block { value } => {
                state.hero.block = state.hero.block.saturating_add(clamp_i32(value));
                ResolveResult::Success
            }

            Effect::Heal { value } => {
                state.hero.heal(clamp_i32(value));
                ResolveResult::Success
            }

            Effect::Status {
                kind,
                value,
                target,
                ..
            } => match target {
                StatusTarget::Enemy => match state.enemies.get_mut(target_index) {
                    Some(enemy) => {
                        enemy.status.add(kind, value);
                        ResolveResult::Success
                    }
                    None => ResolveResult::NoTarget,
                },
                StatusTarget::Hero => {
                    state.hero.status.add(kind, value);
                    ResolveResult::Success
                }
            },

            Effect::Draw { value } => {
                let drawn = draw_cards(state, value as usize, rng) as u32;
                if drawn == value {
                    ResolveResult::Success
                } else {
                    ResolveResult::Partial {
                        requested: value,
                        applied: drawn,
                    }
                }
            }

            Effect::Energy { value } => {
                state.energy = state.energy.saturating_add(value);
                ResolveResult::Success
            }
        }
    }
}

fn damage_monster(enemy: &mut Monster, amount: i32) {
    enemy.hp = enemy.hp.saturating_sub(amount);
}

fn clamp_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
