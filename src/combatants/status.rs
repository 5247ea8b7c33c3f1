//! Status effects attached to combatants.
//!
//! A status is a stacking, decaying counter. The set of kinds is closed so
//! the tick and AI logic can match exhaustively.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Kind of status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Loses `stacks` HP per tick.
    Poison,
    /// Loses `stacks * burn_multiplier` HP per tick.
    Burn,
    /// Attacks for reduced damage while present.
    Chill,
    /// Skips its next attack.
    #[serde(alias = "frozen")]
    Freeze,
}

impl StatusKind {
    pub const ALL: [StatusKind; 4] = [
        StatusKind::Poison,
        StatusKind::Burn,
        StatusKind::Chill,
        StatusKind::Freeze,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StatusKind::Poison => "poison",
            StatusKind::Burn => "burn",
            StatusKind::Chill => "chill",
            StatusKind::Freeze => "freeze",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Remaining stacks per status kind.
///
/// Never holds a zero entry: a status that decays to 0 is removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusMap {
    #[serde(deserialize_with = "nonzero_stacks")]
    stacks: FxHashMap<StatusKind, u32>,
}

fn nonzero_stacks<'de, D>(deserializer: D) -> Result<FxHashMap<StatusKind, u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let mut stacks = <FxHashMap<StatusKind, u32>>::deserialize(deserializer)?;
    stacks.retain(|_, n| *n > 0);
    Ok(stacks)
}

impl StatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stacks, 0 when absent.
    #[must_use]
    pub fn get(&self, kind: StatusKind) -> u32 {
        self.stacks.get(&kind).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn has(&self, kind: StatusKind) -> bool {
        self.get(kind) > 0
    }

    /// Add stacks. Adding 0 is a no-op.
    pub fn add(&mut self, kind: StatusKind, amount: u32) {
        if amount == 0 {
            return;
        }
        let stacks = self.stacks.entry(kind).or_insert(0);
        *stacks = stacks.saturating_add(amount);
    }

    /// Remove one stack, dropping the entry when it reaches 0.
    ///
    /// Returns the remaining stacks.
    pub fn decrement(&mut self, kind: StatusKind) -> u32 {
        match self.stacks.get_mut(&kind) {
            Some(stacks) if *stacks > 1 => {
                *stacks -= 1;
                *stacks
            }
            Some(_) => {
                self.stacks.remove(&kind);
                0
            }
            None => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Active statuses in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (StatusKind, u32)> + '_ {
        StatusKind::ALL
            .into_iter()
            .filter_map(move |kind| self.stacks.get(&kind).map(|&n| (kind, n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_stacks() {
        let mut status = StatusMap::new();
        status.add(StatusKind::Poison, 2);
        status.add(StatusKind::Poison, 3);
        assert_eq!(status.get(StatusKind::Poison), 5);
        assert_eq!(status.get(StatusKind::Burn), 0);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut status = StatusMap::new();
        status.add(StatusKind::Chill, 0);
        assert!(status.is_empty());
    }

    #[test]
    fn test_decrement_removes_at_zero() {
        let mut status = StatusMap::new();
        status.add(StatusKind::Freeze, 2);

        assert_eq!(status.decrement(StatusKind::Freeze), 1);
        assert!(status.has(StatusKind::Freeze));

        assert_eq!(status.decrement(StatusKind::Freeze), 0);
        assert!(!status.has(StatusKind::Freeze));
        assert_eq!(status.len(), 0);

        // absent stays absent
        assert_eq!(status.decrement(StatusKind::Freeze), 0);
        assert!(status.is_empty());
    }

    #[test]
    fn test_iter_order() {
        let mut status = StatusMap::new();
        status.add(StatusKind::Freeze, 1);
        status.add(StatusKind::Poison, 4);

        let entries: Vec<_> = status.iter().collect();
        assert_eq!(entries, vec![(StatusKind::Poison, 4), (StatusKind::Freeze, 1)]);
    }

    #[test]
    fn test_frozen_alias() {
        let kind: StatusKind = serde_json::from_str("\"frozen\"").unwrap();
        assert_eq!(kind, StatusKind::Freeze);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"freeze\"");
    }

    #[test]
    fn test_add_saturates() {
        let mut status = StatusMap::new();
        status.add(StatusKind::Burn, u32::MAX - 1);
        status.add(StatusKind::Burn, 5);
        assert_eq!(status.get(StatusKind::Burn), u32::MAX);
    }

    #[test]
    fn test_deserialize_drops_zero_stacks() {
        let status: StatusMap = serde_json::from_str(r#"{"poison":0,"chill":2}"#).unwrap();
        assert_eq!(status.len(), 1);
        assert!(!status.has(StatusKind::Poison));
        assert_eq!(status.get(StatusKind::Chill), 2);

        let empty: StatusMap = serde_json::from_str(r#"{"freeze":0}"#).unwrap();
        assert!(empty.is_empty());
    }
}
