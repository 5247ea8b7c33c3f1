//! Combatants: the hero, monsters, and their status maps.
//!
//! ## Key Types
//!
//! - `HeroTemplate` / `Hero`: catalog definition and runtime hero
//! - `MonsterTemplate` / `Monster`: unscaled definition and scaled enemy
//! - `StatusKind` / `StatusMap`: closed set of stacking status counters

pub mod hero;
pub mod monster;
pub mod status;

pub use hero::{Hero, HeroId, HeroTemplate};
pub use monster::{Monster, MonsterId, MonsterTemplate, Tier};
pub use status::{StatusKind, StatusMap};
