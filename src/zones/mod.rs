//! Deck, hand and discard.
//!
//! The zone system provides:
//! - `Zones`: the three piles and movement between them
//! - `Pile`: which pile a card is in
//! - `shuffle`, `draw_cards`, `draw_to_hand_size`, `start_turn`: the
//!   deck/draw cycle, reshuffling discard into deck when it runs out

mod draw;
mod manager;

pub use draw::{draw_cards, draw_to_hand_size, shuffle, start_turn};
pub use manager::{Pile, Zones};
