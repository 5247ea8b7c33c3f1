//! Card definitions - static card data.
//!
//! `Card` holds the immutable properties of a card type: cost and the
//! ordered effect list. For example, "Poison Dagger" costs 1, deals 3
//! damage, then applies 2 poison.
//!
//! A copy held in a pile is a `CardInstance`.

use smallvec::SmallVec;
use serde::{Deserialize, Serialize};

use crate::effects::Effect;

/// Unique identifier for a card definition.
///
/// This identifies the "type" of card (e.g., "knight_strike"),
/// not a specific copy in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card category. Cosmetic to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Attack,
    Defense,
    Spell,
    Summon,
    Relic,
}

/// Card rarity. Cosmetic to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Ordered effect list; most cards have one or two.
pub type EffectList = SmallVec<[Effect; 2]>;

/// Static card definition.
///
/// ## Example
///
/// ```
/// use undercrypt::cards::{Card, CardCategory};
/// use undercrypt::combatants::StatusKind;
/// use undercrypt::effects::Effect;
///
/// let dagger = Card::new("poison_dagger", "Poison Dagger", CardCategory::Attack, 1)
///     .with_effect(Effect::damage(3))
///     .with_effect(Effect::status(StatusKind::Poison, 2));
///
/// assert_eq!(dagger.effects.len(), 2);
/// assert_eq!(dagger.summary(), "3 DMG • poison 2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display).
    pub name: String,

    #[serde(rename = "type")]
    pub category: CardCategory,

    /// Energy needed to play.
    pub cost: u32,

    /// Executed in order; later effects see earlier mutations.
    pub effects: EffectList,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Card {
    /// Create a card with no effects.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: CardCategory, cost: u32) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            category,
            cost,
            effects: EffectList::new(),
            rarity: None,
            element: None,
            tags: Vec::new(),
        }
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    /// Short effect summary, e.g. `"6 DMG • 5 Block"`.
    #[must_use]
    pub fn summary(&self) -> String {
        self.effects
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" • ")
    }
}
