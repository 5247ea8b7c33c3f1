//! Post-combat card rewards.
//!
//! After a victory the hero is offered a small draft of catalog cards. Taking
//! one is the only way the number of cards in a game grows; the new copy goes
//! to the discard pile and joins the deck on the next reshuffle.

use crate::cards::{Card, Catalog, InstanceId};
use crate::core::{EngineError, GameState, RandomSource, Result};
use crate::zones::shuffle;

/// Offer `config.reward_choices` distinct catalog cards as the pending
/// reward, replacing any previous offer.
///
/// Offers fewer when the catalog is smaller than that.
pub fn draft_rewards<'s, R: RandomSource>(
    state: &'s mut GameState,
    catalog: &Catalog,
    rng: &mut R,
) -> &'s [Card] {
    let indices: Vec<usize> = (0..catalog.cards().len()).collect();
    let offer: Vec<Card> = shuffle(&indices, rng)
        .into_iter()
        .take(state.config.reward_choices)
        .map(|i| catalog.cards()[i].clone())
        .collect();

    tracing::debug!(
        offer = ?offer.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        "reward drafted"
    );
    state.pending_reward.insert(offer).as_slice()
}

/// Take card `index` of the pending offer into the discard pile.
///
/// ## Errors
///
/// - `NoPendingReward` if nothing is on offer
/// - `InvalidSelection` if `index` is out of range; the offer stays open
pub fn choose_reward(state: &mut GameState, index: usize) -> Result<InstanceId> {
    let offer = state.pending_reward.as_ref().ok_or(EngineError::NoPendingReward)?;
    let card = offer
        .get(index)
        .cloned()
        .ok_or(EngineError::InvalidSelection {
            index,
            len: offer.len(),
        })?;

    state.pending_reward = None;
    let instance = state.new_instance(card);
    let id = instance.id;
    tracing::info!(card = %instance.card_id(), instance = %id, "reward taken");
    state.zones.discard(instance);
    Ok(id)
}

/// Decline the pending offer.
///
/// ## Errors
///
/// - `NoPendingReward` if nothing is on offer
pub fn skip_reward(state: &mut GameState) -> Result<()> {
    state.pending_reward.take().ok_or(EngineError::NoPendingReward)?;
    tracing::debug!("reward skipped");
    Ok(())
}
