//! Combat rules outside of card play.
//!
//! ## Key Types
//!
//! - `scale_enemy_stats`: monster template + hero level -> scaled monster
//! - `enemy_turn`: every living enemy attacks once
//! - `process_status_effects`: per-round poison/burn/chill/freeze tick
//! - `resolve_defeated` / `outcome`: remove the dead, detect victory/defeat
//!
//! ## Round Order
//!
//! ```text
//! start_turn -> play_card* -> enemy_turn -> process_status_effects
//!            -> resolve_defeated -> start_turn ...
//! ```

mod enemy;
mod outcome;
mod scaling;
mod status;

pub use enemy::enemy_turn;
pub use outcome::{outcome, resolve_defeated, CombatOutcome, DefeatReport};
pub use scaling::scale_enemy_stats;
pub use status::process_status_effects;
