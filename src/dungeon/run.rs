//! Dungeon run progress: floors, rooms, and entering them.
//!
//! A run is a sequence of floors. Each floor is a freshly generated row of
//! rooms; once every room on it is completed, `advance_floor` generates the
//! next one at the hero's current level.

use serde::{Deserialize, Serialize};

use crate::cards::Catalog;
use crate::core::{EngineError, GameState, RandomSource, Result};
use crate::zones::start_turn;

use super::generator::{generate_dungeon_rooms, Room};

/// Where the hero is in the dungeon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    pub act: u32,
    /// 1-based floor number.
    pub floor: u32,
    pub rooms: Vec<Room>,
    /// Room being played, if any.
    pub current_room: Option<usize>,
}

impl RunState {
    /// Whether every room on this floor is completed.
    #[must_use]
    pub fn floor_cleared(&self) -> bool {
        self.rooms.iter().all(|r| r.completed)
    }
}

fn new_floor<R: RandomSource>(state: &GameState, catalog: &Catalog, rng: &mut R) -> Vec<Room> {
    generate_dungeon_rooms(
        catalog.monsters(),
        state.hero.level,
        state.config.rooms_per_floor,
        &state.config.scaling,
        rng,
    )
}

/// Begin a dungeon run on floor 1, replacing any run in progress.
pub fn start_run<R: RandomSource>(state: &mut GameState, catalog: &Catalog, rng: &mut R) {
    let rooms = new_floor(state, catalog, rng);
    tracing::info!(rooms = rooms.len(), hero_level = state.hero.level, "run started");
    state.run = Some(RunState {
        act: 1,
        floor: 1,
        rooms,
        current_room: None,
    });
}

/// Enter room `index`.
///
/// A combat room spawns its previewed monster as the only enemy, with the
/// run difficulty applied to its attack, and starts the hero's turn. Other
/// rooms clear the enemy list.
///
/// ## Errors
///
/// - `NoActiveRun` if no run was started
/// - `InvalidRoom` if `index` is out of range or the room is completed
pub fn enter_room<R: RandomSource>(state: &mut GameState, index: usize, rng: &mut R) -> Result<()> {
    let run = state.run.as_mut().ok_or(EngineError::NoActiveRun)?;
    let room = match run.rooms.get(index) {
        Some(room) if !room.completed => room,
        _ => return Err(EngineError::InvalidRoom { index }),
    };

    let kind = room.kind;
    let monster = room.monster.clone();
    run.current_room = Some(index);

    let attack_percent = i64::from(state.config.difficulty.enemy_attack_percent());
    state.enemies = monster
        .into_iter()
        .map(|mut m| {
            m.attack = i32::try_from(i64::from(m.attack) * attack_percent / 100).unwrap_or(m.attack);
            m
        })
        .collect();

    tracing::info!(room = index, %kind, enemies = state.enemies.len(), "entered room");

    if kind.is_combat() {
        start_turn(state, rng);
    }
    Ok(())
}

/// Mark the current room completed and leave it.
///
/// ## Errors
///
/// - `NoActiveRun` if no run was started
/// - `InvalidRoom` if the hero is not in a room; `index` is then the room
///   count of the floor
pub fn complete_room(state: &mut GameState) -> Result<()> {
    let run = state.run.as_mut().ok_or(EngineError::NoActiveRun)?;
    let index = run.current_room.ok_or(EngineError::InvalidRoom { index: run.rooms.len() })?;
    let room = run
        .rooms
        .get_mut(index)
        .ok_or(EngineError::InvalidRoom { index })?;

    room.completed = true;
    run.current_room = None;
    tracing::debug!(room = index, cleared = run.floor_cleared(), "room completed");
    Ok(())
}

/// Move to the next floor if the current one is cleared.
///
/// Returns `true` if a new floor was generated.
///
/// ## Errors
///
/// - `NoActiveRun` if no run was started
pub fn advance_floor<R: RandomSource>(state: &mut GameState, catalog: &Catalog, rng: &mut R) -> Result<bool> {
    let cleared = state.run.as_ref().ok_or(EngineError::NoActiveRun)?.floor_cleared();
    if !cleared {
        return Ok(false);
    }

    let rooms = new_floor(state, catalog, rng);
    let run = state.run.as_mut().ok_or(EngineError::NoActiveRun)?;
    run.floor += 1;
    run.rooms = rooms;
    run.current_room = None;
    tracing::info!(floor = run.floor, hero_level = state.hero.level, "advanced floor");
    Ok(true)
}
