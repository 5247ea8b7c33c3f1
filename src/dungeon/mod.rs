//! Dungeon layout and run progress.
//!
//! ## Key Types
//!
//! - `Room` / `RoomKind`: one encounter slot (battle, elite, boss, shop, event)
//! - `RunState`: act, floor, generated rooms and the room being played
//! - `generate_dungeon_rooms`: lay out a floor with pre-scaled previews
//! - `start_run`, `enter_room`, `complete_room`, `advance_floor`: run flow

mod generator;
mod run;

pub use generator::{generate_dungeon_rooms, Room, RoomKind};
pub use run::{advance_floor, complete_room, enter_room, start_run, RunState};
