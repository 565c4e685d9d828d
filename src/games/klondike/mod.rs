//! Klondike solitaire.
//!
//! The classic patience game:
//! - Seven tableau columns dealt as a triangle, top cards face up
//! - Draw one or three cards at a time from the stock to the waste
//! - Build each suit up from Ace to King on its foundation
//! - Stack the tableau down in alternating colours
//!
//! The game is won when all four foundations reach the King.

mod command;
mod game;

pub use command::{BuildSource, Command, NotationError, PlaySource};
pub use game::{Klondike, KlondikeBuilder};
