//! # rust-klondike
//!
//! A Klondike solitaire rules engine.
//!
//! ## Design Principles
//!
//! 1. **Named Piles**: The board is a record of stock, waste, foundations and
//!    tableau, not a generic collection. Each role keeps its own rules.
//!
//! 2. **All-or-Nothing Moves**: Every command is validated completely before
//!    any card moves. A refused command leaves the board exactly as it was.
//!
//! 3. **Explicit Randomness**: Dealing takes a seedable `GameRng`, so the same
//!    seed always produces the same game.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card model
//! - `zones`: Piles, the board and its snapshot
//! - `rules`: Legality predicates
//! - `games`: The Klondike engine and its command notation
//!
//! ## Example
//!
//! ```
//! use rust_klondike::{Command, KlondikeBuilder};
//!
//! let mut game = KlondikeBuilder::new().build(2024);
//! let draw: Command = "d".parse().unwrap();
//! game.apply(&draw).unwrap();
//!
//! assert_eq!(game.view().waste_count, 1);
//! println!("{}", game.board());
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{DrawCount, GameRng, KlondikeConfig, RuleError};

pub use crate::cards::{Card, Color, Suit};

pub use crate::zones::{Board, BoardView, Pile, PileRef};

pub use crate::games::klondike::{
    BuildSource, Command, Klondike, KlondikeBuilder, NotationError, PlaySource,
};
