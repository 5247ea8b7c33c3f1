//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Card`: Static card data with an ordered effect list
//! - `CardInstance`: One copy of a card living in a pile
//! - `Catalog`: Lookup for cards, heroes and monster templates

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{Card, CardCategory, CardId, EffectList, Rarity};
pub use instance::{CardInstance, InstanceId};
pub use registry::Catalog;
