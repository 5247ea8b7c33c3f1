//! Catalog of static game data.
//!
//! The `Catalog` stores card definitions, hero templates and monster
//! templates, each keyed by a unique string id. It keeps insertion order so
//! reward drafts and dungeon generation are reproducible for a given seed.

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;

use super::definition::{Card, CardId};
use crate::combatants::{HeroId, HeroTemplate, MonsterId, MonsterTemplate};
use crate::core::error::{CatalogKind, EngineError, Result};

const BUILTIN_CARDS: &str = include_str!("../../data/cards.json");
const BUILTIN_HEROES: &str = include_str!("../../data/heroes.json");
const BUILTIN_MONSTERS: &str = include_str!("../../data/monsters.json");

impl Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for HeroId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MonsterId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Ordered, id-indexed collection.
#[derive(Clone, Debug)]
struct Entries<K, V> {
    items: Vec<V>,
    index: FxHashMap<K, usize>,
}

impl<K, V> Default for Entries<K, V> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<K: Hash + Eq + Borrow<str>, V> Entries<K, V> {
    /// Insert, replacing (in place) any entry with the same id.
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get::<str>(key.borrow()) {
            Some(&idx) => Some(std::mem::replace(&mut self.items[idx], value)),
            None => {
                self.index.insert(key, self.items.len());
                self.items.push(value);
                None
            }
        }
    }

    fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&idx| &self.items[idx])
    }
}

/// Registry of cards, heroes and monster templates.
///
/// ## Example
///
/// ```
/// use undercrypt::cards::{Card, CardCategory, Catalog};
/// use undercrypt::effects::Effect;
///
/// let mut catalog = Catalog::new();
/// catalog.register_card(
///     Card::new("knight_strike", "Knight's Strike", CardCategory::Attack, 1)
///         .with_effect(Effect::damage(6)),
/// );
///
/// let found = catalog.card("knight_strike").unwrap();
/// assert_eq!(found.name, "Knight's Strike");
/// assert!(catalog.card("missing").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Entries<CardId, Card>,
    heroes: Entries<HeroId, HeroTemplate>,
    monsters: Entries<MonsterId, MonsterTemplate>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The content shipped with the engine.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CARDS, BUILTIN_HEROES, BUILTIN_MONSTERS)
    }

    /// Load from three JSON arrays (cards, heroes, monsters).
    pub fn from_json(cards: &str, heroes: &str, monsters: &str) -> Result<Self> {
        let mut catalog = Self::new();
        for card in parse::<Card>(cards)? {
            catalog.register_card(card);
        }
        for hero in parse::<HeroTemplate>(heroes)? {
            catalog.register_hero(hero);
        }
        for monster in parse::<MonsterTemplate>(monsters)? {
            catalog.register_monster(monster);
        }
        tracing::debug!(
            cards = catalog.cards.items.len(),
            heroes = catalog.heroes.items.len(),
            monsters = catalog.monsters.items.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Register a card definition. Returns the definition it replaced.
    pub fn register_card(&mut self, card: Card) -> Option<Card> {
        self.cards.insert(card.id.clone(), card)
    }

    pub fn register_hero(&mut self, hero: HeroTemplate) -> Option<HeroTemplate> {
        self.heroes.insert(hero.id.clone(), hero)
    }

    pub fn register_monster(&mut self, monster: MonsterTemplate) -> Option<MonsterTemplate> {
        self.monsters.insert(monster.id.clone(), monster)
    }

    /// Look up a card definition.
    pub fn card(&self, id: &str) -> Result<&Card> {
        self.cards
            .get(id)
            .ok_or_else(|| EngineError::not_found(CatalogKind::Card, id))
    }

    pub fn hero(&self, id: &str) -> Result<&HeroTemplate> {
        self.heroes
            .get(id)
            .ok_or_else(|| EngineError::not_found(CatalogKind::Hero, id))
    }

    pub fn monster(&self, id: &str) -> Result<&MonsterTemplate> {
        self.monsters
            .get(id)
            .ok_or_else(|| EngineError::not_found(CatalogKind::Monster, id))
    }

    /// All cards in registration order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards.items
    }

    #[must_use]
    pub fn monsters(&self) -> &[MonsterTemplate] {
        &self.monsters.items
    }
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(json)?)
}
