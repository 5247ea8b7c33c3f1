//! Card piles and movement between them.
//!
//! `Zones` owns the three piles of a game:
//! - Deck: ordered, drawn from the front
//! - Hand: bounded by the hero's hand size
//! - Discard: refills the deck when it runs dry
//!
//! Every card instance lives in exactly one pile. Movement helpers take the
//! card out of one pile and push it into another, never copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, InstanceId};

/// Which pile a card is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Deck,
    Hand,
    Discard,
}

/// Deck, hand and discard.
///
/// Backed by `im` persistent vectors, so a caller snapshotting the state
/// after each action pays O(1) per pile.
///
/// ## Usage
///
/// ```
/// use undercrypt::cards::{Card, CardCategory, CardInstance, InstanceId};
/// use undercrypt::zones::{Pile, Zones};
///
/// let defend = Card::new("defend", "Defend", CardCategory::Defense, 1);
/// let mut zones = Zones::with_deck(vec![
///     CardInstance::new(InstanceId(0), defend.clone()),
///     CardInstance::new(InstanceId(1), defend),
/// ]);
///
/// let drawn = zones.draw_top().unwrap();
/// assert_eq!(drawn.id, InstanceId(0));
/// assert_eq!(zones.location(InstanceId(0)), Some(Pile::Hand));
/// assert_eq!(zones.location(InstanceId(1)), Some(Pile::Deck));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zones {
    /// Front is the top of the deck.
    pub deck: Vector<CardInstance>,
    pub hand: Vector<CardInstance>,
    pub discard: Vector<CardInstance>,
}

impl Zones {
    /// Create empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create piles with the given deck order and nothing else.
    #[must_use]
    pub fn with_deck(deck: impl IntoIterator<Item = CardInstance>) -> Self {
        Self {
            deck: deck.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Cards across all piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Move the top card of the deck into the hand.
    ///
    /// Returns a copy of the drawn card, or `None` if the deck is empty.
    pub fn draw_top(&mut self) -> Option<CardInstance> {
        let card = self.deck.pop_front()?;
        self.hand.push_back(card.clone());
        Some(card)
    }

    /// Take every card out of the discard pile.
    pub fn take_discard(&mut self) -> Vec<CardInstance> {
        std::mem::take(&mut self.discard).into_iter().collect()
    }

    /// Remove the card at `index` from the hand.
    pub fn take_from_hand(&mut self, index: usize) -> Option<CardInstance> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }

    /// Remove a specific instance from the hand, wherever it now sits.
    pub fn remove_from_hand(&mut self, id: InstanceId) -> Option<CardInstance> {
        let index = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(index))
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: CardInstance) {
        self.discard.push_back(card);
    }

    /// Find which pile holds an instance.
    #[must_use]
    pub fn location(&self, id: InstanceId) -> Option<Pile> {
        if self.deck.iter().any(|c| c.id == id) {
            Some(Pile::Deck)
        } else if self.hand.iter().any(|c| c.id == id) {
            Some(Pile::Hand)
        } else if self.discard.iter().any(|c| c.id == id) {
            Some(Pile::Discard)
        } else {
            None
        }
    }

    /// Copies of a card id across all piles.
    #[must_use]
    pub fn count_of(&self, card_id: &str) -> usize {
        self.deck
            .iter()
            .chain(self.hand.iter())
            .chain(self.discard.iter())
            .filter(|c| c.card_id().as_str() == card_id)
            .count()
    }
}
