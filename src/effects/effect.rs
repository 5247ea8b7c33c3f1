//! Effect definitions.
//!
//! Effects are the atomic mutations a card applies. A card carries an
//! ordered list of them and the resolver runs them strictly in that order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combatants::StatusKind;

/// Who a damage effect hits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageTarget {
    /// The enemy at the play's target index.
    #[default]
    Enemy,
    /// Every enemy, regardless of target index.
    AllEnemies,
    /// The hero (risky cards).
    #[serde(rename = "self")]
    Hero,
}

/// Who a status effect lands on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTarget {
    #[default]
    Enemy,
    #[serde(rename = "self")]
    Hero,
}

/// An atomic card effect.
///
/// ## Combat
///
/// - `Damage`: direct HP loss on the target(s); block does not apply
/// - `Block`: add hero block
/// - `Heal`: restore hero HP, clamped to max HP
/// - `Status`: add stacks of a status to the target
///
/// ## Resources
///
/// - `Draw`: draw cards (reshuffling discard), stopping at hand size
/// - `Energy`: gain energy this turn
///
/// The wire form also accepts the legacy `poison` / `freeze` tags, which
/// become `Status` effects targeting the enemy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EffectRepr", into = "EffectRepr")]
pub enum Effect {
    Damage {
        value: u32,
        target: DamageTarget,
    },
    Block {
        value: u32,
    },
    Heal {
        value: u32,
    },
    Status {
        kind: StatusKind,
        value: u32,
        target: StatusTarget,
        /// Carried from card data; stacks decay one per tick regardless.
        duration: Option<u32>,
    },
    Draw {
        value: u32,
    },
    Energy {
        value: u32,
    },
}

impl Effect {
    /// Damage the targeted enemy.
    pub fn damage(value: u32) -> Self {
        Self::Damage {
            value,
            target: DamageTarget::Enemy,
        }
    }

    /// Damage every enemy.
    pub fn damage_all(value: u32) -> Self {
        Self::Damage {
            value,
            target: DamageTarget::AllEnemies,
        }
    }

    /// Damage the hero.
    pub fn damage_self(value: u32) -> Self {
        Self::Damage {
            value,
            target: DamageTarget::Hero,
        }
    }

    pub fn block(value: u32) -> Self {
        Self::Block { value }
    }

    pub fn heal(value: u32) -> Self {
        Self::Heal { value }
    }

    /// Apply a status to the targeted enemy.
    pub fn status(kind: StatusKind, value: u32) -> Self {
        Self::Status {
            kind,
            value,
            target: StatusTarget::Enemy,
            duration: None,
        }
    }

    /// Apply a status to the hero.
    pub fn status_self(kind: StatusKind, value: u32) -> Self {
        Self::Status {
            kind,
            value,
            target: StatusTarget::Hero,
            duration: None,
        }
    }

    pub fn draw(value: u32) -> Self {
        Self::Draw { value }
    }

    pub fn energy(value: u32) -> Self {
        Self::Energy { value }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Damage { value, target } => {
                let suffix = match target {
                    DamageTarget::Enemy => "",
                    DamageTarget::AllEnemies => " (All)",
                    DamageTarget::Hero => " (Self)",
                };
                write!(f, "{} DMG{}", value, suffix)
            }
            Effect::Block { value } => write!(f, "{} Block", value),
            Effect::Heal { value } => write!(f, "{} Heal", value),
            Effect::Status { kind, value, .. } => write!(f, "{} {}", kind, value),
            Effect::Draw { value } => write!(f, "Draw {}", value),
            Effect::Energy { value } => write!(f, "+{} Energy", value),
        }
    }
}

/// Tagged wire form, including legacy aliases.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum EffectRepr {
    Damage {
        value: u32,
        #[serde(default)]
        target: DamageTarget,
    },
    Block {
        value: u32,
    },
    Heal {
        value: u32,
    },
    Status {
        name: StatusKind,
        value: u32,
        #[serde(default)]
        target: StatusTarget,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<u32>,
    },
    Draw {
        value: u32,
    },
    Energy {
        value: u32,
    },
    Poison {
        value: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<u32>,
    },
    Freeze {
        value: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<u32>,
    },
}

impl From<EffectRepr> for Effect {
    fn from(repr: EffectRepr) -> Self {
        match repr {
            EffectRepr::Damage { value, target } => Effect::Damage { value, target },
            EffectRepr::Block { value } => Effect::Block { value },
            EffectRepr::Heal { value } => Effect::Heal { value },
            EffectRepr::Status {
                name,
                value,
                target,
                duration,
            } => Effect::Status {
                kind: name,
                value,
                target,
                duration,
            },
            EffectRepr::Draw { value } => Effect::Draw { value },
            EffectRepr::Energy { value } => Effect::Energy { value },
            EffectRepr::Poison { value, duration } => Effect::Status {
                kind: StatusKind::Poison,
                value,
                target: StatusTarget::Enemy,
                duration,
            },
            EffectRepr::Freeze { value, duration } => Effect::Status {
                kind: StatusKind::Freeze,
                value,
                target: StatusTarget::Enemy,
                duration,
            },
        }
    }
}

impl From<Effect> for EffectRepr {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::Damage { value, target } => EffectRepr::Damage { value, target },
            Effect::Block { value } => EffectRepr::Block { value },
            Effect::Heal { value } => EffectRepr::Heal { value },
            Effect::Status {
                kind,
                value,
                target,
                duration,
            } => EffectRepr::Status {
                name: kind,
                value,
                target,
                duration,
            },
            Effect::Draw { value } => EffectRepr::Draw { value },
            Effect::Energy { value } => EffectRepr::Energy { value },
        }
    }
}
