//! Piles and the board that owns them.
//!
//! ## Key Types
//!
//! - `Pile`: ordered card sequence, top card last
//! - `PileRef`: names a pile (stock, waste, foundation i, tableau i)
//! - `Board`: the stock, waste, four foundations and seven tableau columns
//! - `BoardView`: owned read-only snapshot for rendering

pub mod board;
pub mod pile;

pub use board::{Board, BoardView, FOUNDATION_COUNT, TABLEAU_COUNT};
pub use pile::{Pile, PileRef, Run, PILE_INLINE};
