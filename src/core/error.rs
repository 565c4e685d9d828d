//! Rule violations reported by the engine.
//!
//! Every fallible engine operation validates completely before touching a
//! pile, so any `Err(RuleError)` means the board is exactly as it was.

use derive_more::Display;

use crate::zones::PileRef;

/// Reason a command was not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum RuleError {
    /// Source pile index does not exist.
    #[display("source {index} is out of range")]
    SourceOutOfRange { index: usize },

    /// Destination pile index does not exist.
    #[display("destination {index} is out of range")]
    DestinationOutOfRange { index: usize },

    /// Run depth is zero or exceeds the column length.
    #[display("cannot lift {depth} cards from a column of {len}")]
    InvalidDepth { depth: usize, len: usize },

    /// Nothing to take from the source pile.
    #[display("{pile} is empty")]
    EmptyPile { pile: PileRef },

    /// Card is not the next rank for its foundation.
    #[display("card does not continue foundation {foundation}")]
    FoundationMismatch { foundation: usize },

    /// Card does not fit on the destination's top card.
    #[display("card cannot be stacked on {pile}")]
    CannotStack { pile: PileRef },

    /// Lifted cards are not a face-up alternating descending run.
    #[display("lifted cards from {pile} are not a valid run")]
    BrokenRun { pile: PileRef },

    /// Source and destination are the same tableau column.
    #[display("cannot move column {column} onto itself")]
    SameColumn { column: usize },

    /// No face-up card in the source attaches to the destination.
    #[display("no card in {pile} attaches to the destination")]
    NoAttachPoint { pile: PileRef },

    /// Stock and waste are both empty.
    #[display("nothing left to draw")]
    NothingToDraw,

    /// Deal attempted on a board that still holds cards.
    #[display("board must be cleared before dealing")]
    BoardNotEmpty,
}

impl std::error::Error for RuleError {}
