//! Core engine types: state, configuration, errors, RNG.
//!
//! This module contains the building blocks every other module threads
//! through: the owned `GameState`, its `EngineConfig`, the `EngineError`
//! kinds, and the injectable `RandomSource`.

pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{Difficulty, EngineConfig, ScalingConfig, TierTable};
pub use error::{CatalogKind, EngineError, Result};
pub use state::GameState;
