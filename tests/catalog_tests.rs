//! Catalog loading and state snapshot tests.

use undercrypt::{
    start_game, CatalogKind, Catalog, Effect, EffectResolver, EngineConfig, EngineError, GameRng,
    GameState, StatusKind,
};

const CARDS: &str = r#"[
  { "id": "jab", "name": "Jab", "type": "Attack", "cost": 1,
    "effects": [{ "type": "damage", "value": 2 }] },
  { "id": "venom", "name": "Venom", "type": "Spell", "cost": 1,
    "effects": [{ "type": "poison", "value": 3, "duration": 3 }] },
  { "id": "ice", "name": "Ice", "type": "Spell", "cost": 2,
    "effects": [{ "type": "status", "name": "frozen", "value": 1, "target": "enemy" }] }
]"#;

const HEROES: &str = r#"[
  { "id": "duelist", "name": "Duelist", "class": "Fencer", "baseHP": 40, "handSize": 3,
    "startingDeck": ["jab", "venom", "ice", "jab"] }
]"#;

const MONSTERS: &str = r#"[
  { "id": "slime", "name": "Slime", "type": "Minion", "hp": 12, "attack": 3 }
]"#;

/// Custom content using the legacy effect tags and status alias.
#[test]
fn test_custom_catalog() {
    let catalog = Catalog::from_json(CARDS, HEROES, MONSTERS).unwrap();

    assert_eq!(catalog.cards().len(), 3);
    assert_eq!(
        catalog.card("venom").unwrap().effects[0],
        Effect::Status {
            kind: StatusKind::Poison,
            value: 3,
            target: undercrypt::StatusTarget::Enemy,
            duration: Some(3),
        }
    );
    assert_eq!(catalog.card("ice").unwrap().summary(), "freeze 1");

    let mut rng = GameRng::new(12);
    let state = start_game(&catalog, "duelist", EngineConfig::default(), &mut rng).unwrap();
    assert_eq!(state.zones.hand.len(), 3);
    assert_eq!(state.zones.deck.len(), 1);
    assert_eq!(state.hero.hp, 40);
}

/// Lookups of unknown ids name the collection.
#[test]
fn test_not_found_kinds() {
    let catalog = Catalog::from_json(CARDS, HEROES, MONSTERS).unwrap();

    assert!(matches!(catalog.card("fireball"), Err(EngineError::NotFound { kind: CatalogKind::Card, .. })));
    assert!(matches!(catalog.monster("dragon"), Err(EngineError::NotFound { kind: CatalogKind::Monster, .. })));

    let err = catalog.hero("paladin").unwrap_err();
    assert_eq!(err.to_string(), "hero not found: paladin");
}

/// Missing required fields are a catalog error, not a panic.
#[test]
fn test_bad_catalog_data() {
    let bad_hero = r#"[{ "id": "x", "name": "X", "class": "Y", "handSize": 5, "startingDeck": [] }]"#;
    assert!(matches!(
        Catalog::from_json(CARDS, bad_hero, MONSTERS),
        Err(EngineError::Catalog(_))
    ));

    let bad_effect = r#"[{ "id": "x", "name": "X", "type": "Spell", "cost": 0,
        "effects": [{ "type": "teleport", "value": 1 }] }]"#;
    assert!(Catalog::from_json(bad_effect, HEROES, MONSTERS).is_err());
}

/// A mid-combat state survives a JSON snapshot unchanged.
#[test]
fn test_state_snapshot_roundtrip() {
    let catalog = Catalog::from_json(CARDS, HEROES, MONSTERS).unwrap();
    let mut rng = GameRng::new(3);
    let mut state = start_game(&catalog, "duelist", EngineConfig::default(), &mut rng).unwrap();
    state.enemies.push(undercrypt::scale_enemy_stats(
        catalog.monster("slime").unwrap(),
        2,
        &state.config.scaling,
    ));
    while EffectResolver::can_play(&state, 0) {
        EffectResolver::play_card(&mut state, 0, 0, &mut rng).unwrap();
    }

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.hero, state.hero);
    assert_eq!(restored.zones, state.zones);
    assert_eq!(restored.enemies, state.enemies);
    assert_eq!(restored.energy, state.energy);
    assert_eq!(restored.config, state.config);
}
