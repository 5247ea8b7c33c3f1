//! Card instances - one physical copy of a card.
//!
//! A deck built from `[strike, defend, defend]` holds three instances; the
//! two defends share a `CardId` but have distinct `InstanceId`s. Exactly one
//! pile (deck, hand or discard) owns an instance at any time.

use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId};

/// Identity of one card copy within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A card copy owned by a pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    pub id: InstanceId,
    pub card: Card,
}

impl CardInstance {
    #[must_use]
    pub fn new(id: InstanceId, card: Card) -> Self {
        Self { id, card }
    }

    #[must_use]
    pub fn card_id(&self) -> &CardId {
        &self.card.id
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.card.cost
    }
}
