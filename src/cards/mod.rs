//! Card model.
//!
//! ## Key Types
//!
//! - `Card`: rank, suit and a mutable face-up flag
//! - `Suit`: the four suits, doubling as foundation indices
//! - `Color`: black or red, always derived from the suit

pub mod card;

pub use card::{
    canonical_deck, Card, Color, InvalidRank, Suit, ACE, DECK_SIZE, KING, RANKS_PER_SUIT,
};
