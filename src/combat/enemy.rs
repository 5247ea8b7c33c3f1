//! Enemy turn AI.

use crate::combatants::StatusKind;
use crate::core::GameState;

/// Every living enemy attacks the hero once.
///
/// - Frozen enemies lose one freeze stack and skip their attack
/// - Chilled enemies hit for `chill_attack_percent` of their attack, floored
/// - The hero's block is subtracted from each attack separately and is not
///   used up, so it mitigates every attacker in the same turn
///
/// Returns the total damage dealt to the hero.
pub fn enemy_turn(state: &mut GameState) -> i32 {
    let chill_percent = i64::from(state.config.chill_attack_percent);
    let block = state.hero.block;
    let mut total = 0;

    for (index, enemy) in state.enemies.iter_mut().enumerate() {
        if !enemy.is_alive() {
            continue;
        }

        if enemy.status.has(StatusKind::Freeze) {
            let left = enemy.status.decrement(StatusKind::Freeze);
            tracing::debug!(enemy = %enemy.id, index, freeze_left = left, "frozen, skipping attack");
            continue;
        }

        let mut attack = enemy.attack;
        if enemy.status.has(StatusKind::Chill) {
            attack = i32::try_from(i64::from(attack) * chill_percent / 100).unwrap_or(attack);
        }
        let damage = attack.saturating_sub(block).max(0);

        state.hero.hp = state.hero.hp.saturating_sub(damage);
        total += damage;
        tracing::debug!(enemy = %enemy.id, index, attack, block, damage, hero_hp = state.hero.hp, "enemy attacks");
    }

    total
}
