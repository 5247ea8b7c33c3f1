//! Card effects and their resolution.
//!
//! - `Effect`: closed set of things a card can do (damage, block, heal,
//!   status, draw, energy)
//! - `DamageTarget`, `StatusTarget`: who an effect hits
//! - `EffectResolver`: validates and plays cards against a `GameState`
//!
//! Effects on a card run strictly in list order; each sees the mutations of
//! the ones before it.

mod effect;
mod resolver;

pub use effect::{DamageTarget, Effect, StatusTarget};
pub use resolver::{EffectResolver, ResolveResult};
