//! Engine error type.
//!
//! Every error is raised synchronously by the operation that detects it,
//! before any state is touched, so callers can simply re-prompt.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: CatalogKind, id: String },

    #[error("no selectable entry at index {index} (have {len})")]
    InvalidSelection { index: usize, len: usize },

    #[error("not enough energy: card costs {cost}, have {available}")]
    InsufficientEnergy { cost: u32, available: u32 },

    #[error("no dungeon run in progress")]
    NoActiveRun,

    #[error("room {index} cannot be entered")]
    InvalidRoom { index: usize },

    #[error("no reward is pending")]
    NoPendingReward,

    #[error("malformed catalog data")]
    Catalog(#[from] serde_json::Error),
}

impl EngineError {
    pub(crate) fn not_found(kind: CatalogKind, id: impl Into<String>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }
}

/// Which catalog collection a lookup went to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CatalogKind {
    Card,
    Hero,
    Monster,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CatalogKind::Card => "card",
            CatalogKind::Hero => "hero",
            CatalogKind::Monster => "monster",
        };
        write!(f, "{}", label)
    }
}
