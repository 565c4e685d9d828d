//! Klondike legality rules.
//!
//! The predicates here decide whether a card may go to a foundation, whether
//! a card may land on a tableau column, and whether a lifted run is valid.
//! The engine in `games::klondike` calls into them but keeps the "what moves
//! where" bookkeeping to itself.

pub mod legality;

pub use legality::{attach_depth, can_build, can_stack, is_valid_run};
