//! Dungeon floor generation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combat::scale_enemy_stats;
use crate::combatants::{Monster, MonsterTemplate, Tier};
use crate::core::{RandomSource, ScalingConfig};

/// Kind of room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Battle,
    Elite,
    Boss,
    Shop,
    Event,
}

impl RoomKind {
    /// Whether entering this room starts a fight.
    #[must_use]
    pub fn is_combat(self) -> bool {
        matches!(self, RoomKind::Battle | RoomKind::Elite | RoomKind::Boss)
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoomKind::Battle => "battle",
            RoomKind::Elite => "elite",
            RoomKind::Boss => "boss",
            RoomKind::Shop => "shop",
            RoomKind::Event => "event",
        };
        f.write_str(label)
    }
}

/// One slot on a dungeon floor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub kind: RoomKind,
    pub completed: bool,
    /// Pre-scaled encounter preview. `None` for shops and events.
    pub monster: Option<Monster>,
}

/// Lay out `count` rooms for a floor.
///
/// Room `i` (0-based), first matching rule wins:
/// 1. last room: boss
/// 2. `(i + 1) % 3 == 0`: elite, or a battle against a minion when the
///    pool has no elites
/// 3. `i % 4 == 1`: shop
/// 4. `i % 5 == 2`: event
/// 5. otherwise: battle against a minion
///
/// Monsters are scaled for `hero_level + i / 2`. A combat room whose tier
/// is missing from the pool falls back to the next weaker tier, and has no
/// monster if the pool is empty.
pub fn generate_dungeon_rooms<R: RandomSource>(
    pool: &[MonsterTemplate],
    hero_level: u32,
    count: usize,
    scaling: &ScalingConfig,
    rng: &mut R,
) -> Vec<Room> {
    let of_tier = |tier: Tier| pool.iter().filter(|m| m.tier == tier).collect::<Vec<_>>();
    let minions = of_tier(Tier::Minion);
    let elites = of_tier(Tier::Elite);
    let bosses = of_tier(Tier::Boss);

    let mut rooms = Vec::with_capacity(count);
    for i in 0..count {
        let (kind, template) = if i + 1 == count {
            let template = rng
                .choose(&bosses)
                .or_else(|| rng.choose(&elites))
                .or_else(|| rng.choose(&minions));
            (RoomKind::Boss, template)
        } else if (i + 1) % 3 == 0 {
            match rng.choose(&elites) {
                Some(elite) => (RoomKind::Elite, Some(elite)),
                None => (RoomKind::Battle, rng.choose(&minions)),
            }
        } else if i % 4 == 1 {
            (RoomKind::Shop, None)
        } else if i % 5 == 2 {
            (RoomKind::Event, None)
        } else {
            (RoomKind::Battle, rng.choose(&minions))
        };

        let level = hero_level + u32::try_from(i / 2).unwrap_or(u32::MAX);
        let monster = template.map(|t| scale_enemy_stats(t, level, scaling));

        rooms.push(Room {
            id: format!("room-{i}"),
            kind,
            completed: false,
            monster,
        });
    }

    tracing::debug!(
        count,
        hero_level,
        layout = %rooms.iter().map(|r| r.kind.to_string()).collect::<Vec<_>>().join(","),
        "generated dungeon floor"
    );
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatants::MonsterId;
    use crate::core::GameRng;

    fn template(id: &str, tier: Tier, hp: i32) -> MonsterTemplate {
        MonsterTemplate {
            id: MonsterId::new(id),
            name: id.to_string(),
            tier,
            hp,
            attack: 10,
        }
    }

    fn pool() -> Vec<MonsterTemplate> {
        vec![
            template("rat", Tier::Minion, 25),
            template("skeleton", Tier::Minion, 30),
            template("orc", Tier::Elite, 45),
            template("lich", Tier::Boss, 90),
        ]
    }

    fn kinds(rooms: &[Room]) -> Vec<RoomKind> {
        rooms.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn test_six_room_layout() {
        let mut rng = GameRng::new(3);
        let rooms = generate_dungeon_rooms(&pool(), 1, 6, &ScalingConfig::default(), &mut rng);

        use RoomKind::*;
        assert_eq!(kinds(&rooms), vec![Battle, Shop, Elite, Battle, Battle, Boss]);
        assert_eq!(rooms[4].id, "room-4");
        assert!(rooms.iter().all(|r| !r.completed));
    }

    #[test]
    fn test_longer_layout() {
        let mut rng = GameRng::new(3);
        let rooms = generate_dungeon_rooms(&pool(), 1, 10, &ScalingConfig::default(), &mut rng);

        use RoomKind::*;
        assert_eq!(
            kinds(&rooms),
            vec![Battle, Shop, Elite, Battle, Battle, Elite, Battle, Event, Elite, Boss]
        );
    }

    #[test]
    fn test_monsters_match_room_kind() {
        let mut rng = GameRng::new(11);
        let rooms = generate_dungeon_rooms(&pool(), 2, 8, &ScalingConfig::default(), &mut rng);

        for (i, room) in rooms.iter().enumerate() {
            match room.kind {
                RoomKind::Shop | RoomKind::Event => assert!(room.monster.is_none()),
                RoomKind::Battle => assert_eq!(room.monster.as_ref().map(|m| m.tier), Some(Tier::Minion)),
                RoomKind::Elite => assert_eq!(room.monster.as_ref().map(|m| m.tier), Some(Tier::Elite)),
                RoomKind::Boss => assert_eq!(room.monster.as_ref().map(|m| m.tier), Some(Tier::Boss)),
            }
            if let Some(monster) = &room.monster {
                assert_eq!(monster.level, 2 + (i as u32) / 2);
            }
        }
    }

    #[test]
    fn test_elite_falls_back_to_minion_battle() {
        let pool = vec![template("rat", Tier::Minion, 25), template("lich", Tier::Boss, 90)];
        let mut rng = GameRng::new(5);

        let rooms = generate_dungeon_rooms(&pool, 1, 6, &ScalingConfig::default(), &mut rng);

        assert_eq!(rooms[2].kind, RoomKind::Battle);
        assert_eq!(rooms[2].monster.as_ref().map(|m| m.id.as_str()), Some("rat"));
    }

    #[test]
    fn test_same_seed_same_floor() {
        let a = generate_dungeon_rooms(&pool(), 1, 6, &ScalingConfig::default(), &mut GameRng::new(9));
        let b = generate_dungeon_rooms(&pool(), 1, 6, &ScalingConfig::default(), &mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_pool_and_zero_count() {
        let mut rng = GameRng::new(1);
        let rooms = generate_dungeon_rooms(&[], 1, 3, &ScalingConfig::default(), &mut rng);
        assert_eq!(rooms.len(), 3);
        assert!(rooms.iter().all(|r| r.monster.is_none()));

        assert!(generate_dungeon_rooms(&pool(), 1, 0, &ScalingConfig::default(), &mut rng).is_empty());
    }
}
