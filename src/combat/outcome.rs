//! Kill resolution and combat outcome.

use serde::{Deserialize, Serialize};

use crate::combatants::Monster;
use crate::core::GameState;
use crate::progression::award_enemy_xp;

/// State of the current fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    Ongoing,
    /// Every enemy is dead.
    Victory,
    /// Hero HP reached 0. Takes precedence over victory.
    Defeat,
}

impl CombatOutcome {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != CombatOutcome::Ongoing
    }
}

/// What `resolve_defeated` removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DefeatReport {
    /// Removed enemies, in their former target order.
    pub defeated: Vec<Monster>,
    pub leveled_up: bool,
}

/// Remove enemies at 0 HP or below, count them and award their XP.
///
/// Target indices of the survivors shift down to close the gaps.
pub fn resolve_defeated(state: &mut GameState) -> DefeatReport {
    if state.enemies.iter().all(Monster::is_alive) {
        return DefeatReport::default();
    }

    let (alive, defeated): (Vec<_>, Vec<_>) =
        std::mem::take(&mut state.enemies).into_iter().partition(Monster::is_alive);
    state.enemies = alive;

    let mut leveled_up = false;
    for enemy in &defeated {
        state.enemies_defeated += 1;
        tracing::info!(enemy = %enemy.id, tier = ?enemy.tier, "enemy defeated");
        leveled_up |= award_enemy_xp(state, enemy);
    }

    DefeatReport { defeated, leveled_up }
}

/// Current outcome. Hero defeat is checked first.
#[must_use]
pub fn outcome(state: &GameState) -> CombatOutcome {
    if state.hero.is_defeated() {
        CombatOutcome::Defeat
    } else if state.living_enemies().next().is_none() {
        CombatOutcome::Victory
    } else {
        CombatOutcome::Ongoing
    }
}
