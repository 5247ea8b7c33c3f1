//! Dungeon run tests.
//!
//! Plays whole floors with a greedy policy: play every affordable card at
//! the first enemy, end turn, take the first reward after each win.

use undercrypt::{
    advance_floor, choose_reward, complete_room, draft_rewards, end_turn, enter_room,
    generate_dungeon_rooms, skip_reward, start_game, start_run, Catalog, CombatOutcome,
    EffectResolver, EngineConfig, EngineError, GameRng, GameState, RoomKind, ScalingConfig, Tier,
};

/// Play the current fight to the end, at most `max_rounds` rounds.
fn fight(state: &mut GameState, rng: &mut GameRng, max_rounds: usize) -> CombatOutcome {
    for _ in 0..max_rounds {
        // Zero-cost draw cards can chain; cap plays per turn.
        for _ in 0..50 {
            let Some(i) = (0..state.zones.hand.len()).find(|&i| EffectResolver::can_play(state, i)) else {
                break;
            };
            EffectResolver::play_card(state, i, 0, rng).expect("playable card");
            assert!(state.zones.hand.len() <= state.hero.hand_size);
        }
        let outcome = end_turn(state, rng);
        if outcome.is_over() {
            return outcome;
        }
    }
    CombatOutcome::Ongoing
}

/// Builtin floor layout at hero level 1.
#[test]
fn test_builtin_floor_layout() {
    let catalog = Catalog::builtin().unwrap();
    let mut rng = GameRng::new(8);

    let rooms = generate_dungeon_rooms(catalog.monsters(), 1, 6, &ScalingConfig::default(), &mut rng);

    let kinds: Vec<_> = rooms.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RoomKind::Battle,
            RoomKind::Shop,
            RoomKind::Elite,
            RoomKind::Battle,
            RoomKind::Battle,
            RoomKind::Boss
        ]
    );

    let boss = rooms[5].monster.as_ref().unwrap();
    assert_eq!(boss.id.as_str(), "crypt_lich");
    assert_eq!(boss.tier, Tier::Boss);
    assert_eq!(boss.level, 3);
    // 90 * 1.16 * 1.8 = 187.92
    assert_eq!(boss.hp, 187);
    assert_eq!(boss.base_hp, 90);

    let elite = rooms[2].monster.as_ref().unwrap();
    assert_eq!(elite.id.as_str(), "orc_brute");
    assert_eq!(elite.level, 2);
}

/// Same seed, same run.
#[test]
fn test_run_is_reproducible() {
    let catalog = Catalog::builtin().unwrap();

    let play = |seed: u64| {
        let mut rng = GameRng::new(seed);
        let mut state = start_game(&catalog, "adept_of_embers", EngineConfig::default(), &mut rng).unwrap();
        start_run(&mut state, &catalog, &mut rng);
        enter_room(&mut state, 0, &mut rng).unwrap();
        let outcome = fight(&mut state, &mut rng, 30);
        (outcome, state.hero.hp, state.hero.xp, state.run.clone())
    };

    assert_eq!(play(99), play(99));
}

/// A full floor: fights, rewards, shop/event rooms, then the next floor.
#[test]
fn test_full_floor() {
    let catalog = Catalog::builtin().unwrap();
    let mut rng = GameRng::new(2024);
    let mut state = start_game(&catalog, "knight_of_ashes", EngineConfig::default(), &mut rng).unwrap();
    start_run(&mut state, &catalog, &mut rng);

    let mut cards = state.card_count();
    let room_count = state.run.as_ref().unwrap().rooms.len();

    for index in 0..room_count {
        let kind = state.run.as_ref().unwrap().rooms[index].kind;
        enter_room(&mut state, index, &mut rng).unwrap();

        if kind.is_combat() {
            assert_eq!(state.enemies.len(), 1);
            match fight(&mut state, &mut rng, 60) {
                CombatOutcome::Victory => {
                    let offered = draft_rewards(&mut state, &catalog, &mut rng).len();
                    assert_eq!(offered, 3);
                    choose_reward(&mut state, 0).unwrap();
                    cards += 1;
                }
                CombatOutcome::Defeat => {
                    assert!(state.hero.hp <= 0);
                    assert_eq!(state.card_count(), cards);
                    return;
                }
                CombatOutcome::Ongoing => panic!("fight did not finish"),
            }
        } else {
            assert!(state.enemies.is_empty());
        }

        assert_eq!(state.card_count(), cards);
        complete_room(&mut state).unwrap();
    }

    let run = state.run.as_ref().unwrap();
    assert!(run.floor_cleared());
    assert!(state.enemies_defeated >= 4);
    assert!(state.hero.level >= 2);

    assert!(advance_floor(&mut state, &catalog, &mut rng).unwrap());
    let run = state.run.as_ref().unwrap();
    assert_eq!(run.floor, 2);
    let boss = run.rooms.last().and_then(|r| r.monster.as_ref()).unwrap();
    assert_eq!(boss.level, state.hero.level + 2);
}

/// Reward flow errors leave state intact.
#[test]
fn test_reward_errors() {
    let catalog = Catalog::builtin().unwrap();
    let mut rng = GameRng::new(5);
    let mut state = start_game(&catalog, "shadow_rogue", EngineConfig::default(), &mut rng).unwrap();
    let cards = state.card_count();

    assert!(matches!(skip_reward(&mut state), Err(EngineError::NoPendingReward)));

    draft_rewards(&mut state, &catalog, &mut rng);
    assert!(matches!(
        choose_reward(&mut state, 7),
        Err(EngineError::InvalidSelection { index: 7, len: 3 })
    ));
    assert_eq!(state.card_count(), cards);

    skip_reward(&mut state).unwrap();
    assert!(state.pending_reward.is_none());
    assert_eq!(state.card_count(), cards);
}
