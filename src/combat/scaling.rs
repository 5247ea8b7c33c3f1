//! Enemy stat scaling.

use crate::combatants::{Monster, MonsterTemplate, StatusMap};
use crate::core::ScalingConfig;

/// Build a monster from `template` scaled for `hero_level`.
///
/// `stat * (100 + (level - 1) * per_level%) * tier% / 10000`, floored.
/// Pure: the same inputs always give the same monster.
///
/// ```
/// use undercrypt::combat::scale_enemy_stats;
/// use undercrypt::combatants::{MonsterId, MonsterTemplate, Tier};
/// use undercrypt::core::ScalingConfig;
///
/// let rat = MonsterTemplate {
///     id: MonsterId::new("giant_rat"),
///     name: "Giant Rat".into(),
///     tier: Tier::Minion,
///     hp: 25,
///     attack: 8,
/// };
/// let scaled = scale_enemy_stats(&rat, 3, &ScalingConfig::default());
/// assert_eq!((scaled.hp, scaled.attack), (29, 8));
/// assert_eq!(scaled.base_hp, 25);
/// ```
#[must_use]
pub fn scale_enemy_stats(template: &MonsterTemplate, hero_level: u32, scaling: &ScalingConfig) -> Monster {
    let tier = scaling.tier_percent.get(template.tier);
    let above_one = hero_level.saturating_sub(1);

    Monster {
        id: template.id.clone(),
        name: template.name.clone(),
        tier: template.tier,
        hp: scale(template.hp, above_one, scaling.hp_percent_per_level, tier),
        base_hp: template.hp,
        attack: scale(template.attack, above_one, scaling.attack_percent_per_level, tier),
        level: hero_level,
        status: StatusMap::new(),
    }
}

fn scale(stat: i32, levels: u32, per_level: u32, tier: u32) -> i32 {
    let growth = 100 + i64::from(levels) * i64::from(per_level);
    let scaled = i64::from(stat) * growth * i64::from(tier) / 10_000;
    i32::try_from(scaled).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatants::{MonsterId, Tier};

    fn template(tier: Tier, hp: i32, attack: i32) -> MonsterTemplate {
        MonsterTemplate {
            id: MonsterId::new("m"),
            name: "M".to_string(),
            tier,
            hp,
            attack,
        }
    }

    #[test]
    fn test_minion_level_one_is_unchanged() {
        let m = scale_enemy_stats(&template(Tier::Minion, 25, 8), 1, &ScalingConfig::default());
        assert_eq!((m.hp, m.attack, m.level), (25, 8, 1));
        assert!(m.status.is_empty());
    }

    #[test]
    fn test_minion_level_three() {
        let m = scale_enemy_stats(&template(Tier::Minion, 25, 8), 3, &ScalingConfig::default());
        assert_eq!(m.hp, 29);
        assert_eq!(m.attack, 8);
        assert_eq!(m.level, 3);
        assert_eq!(m.base_hp, 25);
    }

    #[test]
    fn test_tier_multipliers() {
        let scaling = ScalingConfig::default();

        let elite = scale_enemy_stats(&template(Tier::Elite, 45, 14), 1, &scaling);
        assert_eq!((elite.hp, elite.attack), (63, 19));

        // 90 * 1.40 * 1.8 = 226.8, 16 * 1.25 * 1.8 = 36
        let boss = scale_enemy_stats(&template(Tier::Boss, 90, 16), 6, &scaling);
        assert_eq!((boss.hp, boss.attack), (226, 36));
    }

    #[test]
    fn test_level_zero_treated_as_one() {
        let m = scale_enemy_stats(&template(Tier::Minion, 30, 10), 0, &ScalingConfig::default());
        assert_eq!((m.hp, m.attack), (30, 10));
    }
}
