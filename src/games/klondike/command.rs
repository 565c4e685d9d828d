//! Engine commands and the short move notation.
//!
//! A `Command` is one player intent, independent of any text encoding.
//! The notation is a convenience for terminal front ends; it names piles by
//! single hex digits:
//!
//! | Digit   | Pile                      |
//! |---------|---------------------------|
//! | `0`-`6` | tableau columns           |
//! | `7`     | waste                     |
//! | `8`-`b` | foundations 0-3           |
//! | `d`     | stock (draw or restock)   |
//!
//! Grammar:
//! - `d`: draw
//! - `s`: build from `s` to its foundation
//! - `sd`: build from `s` if `d` is a foundation, play from `s` if `s` is the
//!   waste or a foundation, otherwise move with inferred depth
//! - `sdn`: move `n` cards from column `s` to column `d`
//!
//! Parsing only checks syntax. Piles that do not exist parse fine and are
//! rejected by the engine.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::zones::{PileRef, TABLEAU_COUNT};

const WASTE_DIGIT: usize = 7;
const FIRST_FOUNDATION_DIGIT: usize = 8;

/// Where a card going to its foundation comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildSource {
    Tableau(usize),
    Waste,
}

impl BuildSource {
    #[must_use]
    pub fn pile(self) -> PileRef {
        match self {
            BuildSource::Tableau(i) => PileRef::Tableau(i),
            BuildSource::Waste => PileRef::Waste,
        }
    }
}

/// Where a card going onto the tableau comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaySource {
    Foundation(usize),
    Waste,
}

impl PlaySource {
    #[must_use]
    pub fn pile(self) -> PileRef {
        match self {
            PlaySource::Foundation(i) => PileRef::Foundation(i),
            PlaySource::Waste => PileRef::Waste,
        }
    }
}

/// One player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Discard from the stock, or restock once the stock is empty.
    Draw,
    /// Move a top card to its foundation.
    Build(BuildSource),
    /// Move a waste or foundation card onto a tableau column.
    Play(PlaySource, usize),
    /// Move a run between tableau columns. `None` infers the depth.
    Move {
        source: usize,
        destination: usize,
        depth: Option<usize>,
    },
}

/// Notation that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum NotationError {
    #[display("empty command")]
    Empty,

    #[display("'{found}' is not a pile digit")]
    BadDigit { found: char },

    #[display("commands are 1 to 3 digits, got {len}")]
    BadLength { len: usize },
}

impl std::error::Error for NotationError {}

fn digit(c: char) -> Result<usize, NotationError> {
    c.to_digit(16)
        .map(|d| d as usize)
        .ok_or(NotationError::BadDigit { found: c })
}

fn build_source(digit: usize) -> BuildSource {
    if digit == WASTE_DIGIT {
        BuildSource::Waste
    } else {
        BuildSource::Tableau(digit)
    }
}

impl FromStr for Command {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NotationError::Empty);
        }
        if s.eq_ignore_ascii_case("d") {
            return Ok(Command::Draw);
        }

        let digits = s.chars().map(digit).collect::<Result<Vec<_>, _>>()?;

        match digits[..] {
            [source] => Ok(Command::Build(build_source(source))),
            [source, destination] if destination > WASTE_DIGIT => {
                Ok(Command::Build(build_source(source)))
            }
            [source, destination] if source >= TABLEAU_COUNT => {
                let from = if source == WASTE_DIGIT {
                    PlaySource::Waste
                } else {
                    PlaySource::Foundation(source - FIRST_FOUNDATION_DIGIT)
                };
                Ok(Command::Play(from, destination))
            }
            [source, destination] => Ok(Command::Move {
                source,
                destination,
                depth: None,
            }),
            [source, destination, depth] => Ok(Command::Move {
                source,
                destination,
                depth: Some(depth),
            }),
            _ => Err(NotationError::BadLength { len: digits.len() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Command, NotationError> {
        s.parse()
    }

    #[test]
    fn test_draw() {
        assert_eq!(parse("d"), Ok(Command::Draw));
        assert_eq!(parse(" D "), Ok(Command::Draw));
    }

    #[test]
    fn test_single_digit_builds() {
        assert_eq!(parse("3"), Ok(Command::Build(BuildSource::Tableau(3))));
        assert_eq!(parse("7"), Ok(Command::Build(BuildSource::Waste)));
    }

    #[test]
    fn test_two_digits_to_foundation_builds() {
        assert_eq!(parse("28"), Ok(Command::Build(BuildSource::Tableau(2))));
        assert_eq!(parse("7b"), Ok(Command::Build(BuildSource::Waste)));
    }

    #[test]
    fn test_two_digits_play() {
        assert_eq!(parse("74"), Ok(Command::Play(PlaySource::Waste, 4)));
        assert_eq!(parse("80"), Ok(Command::Play(PlaySource::Foundation(0), 0)));
        assert_eq!(parse("B6"), Ok(Command::Play(PlaySource::Foundation(3), 6)));
    }

    #[test]
    fn test_two_digits_move_infers_depth() {
        assert_eq!(
            parse("15"),
            Ok(Command::Move {
                source: 1,
                destination: 5,
                depth: None
            })
        );
    }

    #[test]
    fn test_three_digits_move() {
        assert_eq!(
            parse("06a"),
            Ok(Command::Move {
                source: 0,
                destination: 6,
                depth: Some(10)
            })
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(""), Err(NotationError::Empty));
        assert_eq!(parse("1x"), Err(NotationError::BadDigit { found: 'x' }));
        assert_eq!(parse("1234"), Err(NotationError::BadLength { len: 4 }));
        assert_eq!(
            NotationError::BadDigit { found: 'x' }.to_string(),
            "'x' is not a pile digit"
        );
    }
}
