//! Shuffling and drawing.

use crate::core::{GameState, RandomSource};

/// Return a uniformly shuffled copy of `items` (Fisher-Yates).
///
/// The input is left untouched.
pub fn shuffle<T: Clone, R: RandomSource>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.index(i + 1);
        out.swap(i, j);
    }
    out
}

/// Move the shuffled discard pile into the (empty) deck.
fn reshuffle_discard<R: RandomSource>(state: &mut GameState, rng: &mut R) {
    let discard = state.zones.take_discard();
    tracing::debug!(cards = discard.len(), "reshuffling discard into deck");
    state.zones.deck = shuffle(&discard, rng).into_iter().collect();
}

/// Draw up to `count` cards, stopping early at hand size or when both deck
/// and discard are empty. Returns how many were drawn.
pub fn draw_cards<R: RandomSource>(state: &mut GameState, count: usize, rng: &mut R) -> usize {
    let mut drawn = 0;
    while drawn < count && state.zones.hand.len() < state.hero.hand_size {
        if state.zones.deck.is_empty() {
            if state.zones.discard.is_empty() {
                break;
            }
            reshuffle_discard(state, rng);
        }
        match state.zones.draw_top() {
            Some(card) => {
                tracing::trace!(card = %card.card_id(), instance = %card.id, "drew card");
                drawn += 1;
            }
            None => break,
        }
    }
    drawn
}

/// Fill the hand up to the hero's hand size.
///
/// A no-op when the hand is full or both piles are empty.
pub fn draw_to_hand_size<R: RandomSource>(state: &mut GameState, rng: &mut R) -> usize {
    let missing = state.hero.hand_size.saturating_sub(state.zones.hand.len());
    draw_cards(state, missing, rng)
}

/// Begin the hero's turn: refill energy, drop block, draw up.
///
/// This is the only place block resets.
pub fn start_turn<R: RandomSource>(state: &mut GameState, rng: &mut R) {
    state.energy = state.max_energy;
    state.hero.block = 0;
    let drawn = draw_to_hand_size(state, rng);
    tracing::debug!(energy = state.energy, drawn, "turn started");
}
