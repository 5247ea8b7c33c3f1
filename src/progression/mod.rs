//! XP and leveling.
//!
//! Levels run from 1 to `level_cap`. Each level-up:
//! - grows max HP by `level_hp_growth_percent` (floored)
//! - heals `level_heal_percent` of the new max HP
//! - raises max energy by 1, up to `max_energy_cap`
//! - sets the next threshold from the XP curve

use crate::combatants::Monster;
use crate::core::GameState;

/// Add XP to the hero, leveling up as many times as it covers.
///
/// Returns `true` if at least one level-up happened.
pub fn gain_xp(state: &mut GameState, amount: u32) -> bool {
    let config = &state.config;
    let hero = &mut state.hero;
    hero.xp = hero.xp.saturating_add(amount);

    let mut leveled = false;
    while hero.xp >= hero.max_xp && hero.level < config.level_cap {
        hero.xp -= hero.max_xp;
        hero.level += 1;

        hero.base_hp = percent_of(hero.base_hp, 100 + config.level_hp_growth_percent);
        hero.heal(percent_of(hero.base_hp, config.level_heal_percent));

        if state.max_energy < config.max_energy_cap {
            state.max_energy += 1;
        }
        hero.max_xp = config.max_xp_for_level(hero.level);
        leveled = true;

        tracing::info!(
            level = hero.level,
            base_hp = hero.base_hp,
            max_energy = state.max_energy,
            next = hero.max_xp,
            "level up"
        );
    }
    leveled
}

/// XP a kill is worth: tier base, +`xp_percent_per_enemy_level` per level
/// above 1, floored.
#[must_use]
pub fn enemy_xp(state: &GameState, enemy: &Monster) -> u32 {
    let config = &state.config;
    let base = u64::from(config.xp_reward.get(enemy.tier));
    let bonus = u64::from(enemy.level.saturating_sub(1)) * u64::from(config.xp_percent_per_enemy_level);
    u32::try_from(base * (100 + bonus) / 100).unwrap_or(u32::MAX)
}

/// Award the XP for defeating `enemy`. Returns whether the hero leveled.
pub fn award_enemy_xp(state: &mut GameState, enemy: &Monster) -> bool {
    let xp = enemy_xp(state, enemy);
    tracing::debug!(enemy = %enemy.id, level = enemy.level, xp, "awarding xp");
    gain_xp(state, xp)
}

fn percent_of(value: i32, percent: u32) -> i32 {
    i32::try_from(i64::from(value) * i64::from(percent) / 100).unwrap_or(i32::MAX)
}
