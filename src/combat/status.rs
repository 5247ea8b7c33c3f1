//! Status ticks.
//!
//! Runs once per round, after the enemy turn and before the next
//! `start_turn`. Each status kind ticks independently:
//!
//! | Status | Tick                               | Decrement               |
//! |--------|------------------------------------|-------------------------|
//! | poison | lose `stacks` HP                   | here                    |
//! | burn   | lose `stacks * burn_multiplier` HP | here                    |
//! | chill  | none (attack penalty)              | here                    |
//! | freeze | none (skip attack)                 | enemy turn; hero's here |

use crate::combatants::{StatusKind, StatusMap};
use crate::core::GameState;

/// Tick every status on the hero and every enemy, dead or alive.
///
/// HP may fall to 0 or below; removing the dead is the caller's job.
pub fn process_status_effects(state: &mut GameState) {
    let burn_multiplier = state.config.burn_multiplier;

    let hero_loss = tick(&mut state.hero.status, burn_multiplier, true);
    if hero_loss > 0 {
        state.hero.hp = state.hero.hp.saturating_sub(hero_loss);
        tracing::debug!(loss = hero_loss, hp = state.hero.hp, "hero status tick");
    }

    for (index, enemy) in state.enemies.iter_mut().enumerate() {
        if enemy.status.is_empty() {
            continue;
        }
        let loss = tick(&mut enemy.status, burn_multiplier, false);
        enemy.hp = enemy.hp.saturating_sub(loss);
        tracing::debug!(enemy = %enemy.id, index, loss, hp = enemy.hp, "enemy status tick");
    }
}

/// Apply one tick to a status map and return the HP lost.
fn tick(status: &mut StatusMap, burn_multiplier: u32, decay_freeze: bool) -> i32 {
    let mut loss: u32 = 0;

    let poison = status.get(StatusKind::Poison);
    if poison > 0 {
        loss = loss.saturating_add(poison);
        status.decrement(StatusKind::Poison);
    }

    let burn = status.get(StatusKind::Burn);
    if burn > 0 {
        loss = loss.saturating_add(burn.saturating_mul(burn_multiplier));
        status.decrement(StatusKind::Burn);
    }

    if status.has(StatusKind::Chill) {
        status.decrement(StatusKind::Chill);
    }

    if decay_freeze && status.has(StatusKind::Freeze) {
        status.decrement(StatusKind::Freeze);
    }

    i32::try_from(loss).unwrap_or(i32::MAX)
}
