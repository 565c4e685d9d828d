//! Move legality predicates.
//!
//! Pure functions over cards and piles. They never mutate; the engine calls
//! them to validate a command completely before applying it.

use crate::cards::Card;
use crate::zones::Pile;

/// Can `card` go on top of `foundation`?
///
/// The foundation must hold exactly `rank - 1` cards. Callers pick the
/// foundation by the card's suit, so together with this length check every
/// foundation stays a gap-free `1..=k` run of one suit.
#[must_use]
pub fn can_build(card: &Card, foundation: &Pile) -> bool {
    foundation.len() + 1 == card.rank() as usize
}

/// Can `card` (the bottom of whatever is being placed) land on `destination`?
///
/// Empty columns take any card. Otherwise the destination top must be one
/// rank higher and the opposite colour.
#[must_use]
pub fn can_stack(card: &Card, destination: &Pile) -> bool {
    match destination.top() {
        None => true,
        Some(top) => top.rank() == card.rank() + 1 && top.color() != card.color(),
    }
}

/// Is `cards` (bottom first) a face-up run, alternating colour and
/// descending by one?
#[must_use]
pub fn is_valid_run(cards: &[Card]) -> bool {
    cards.iter().all(Card::is_face_up)
        && cards.windows(2).all(|pair| {
            let (lower, upper) = (&pair[0], &pair[1]);
            lower.rank() == upper.rank() + 1 && lower.color() != upper.color()
        })
}

/// Depth of the first face-up card in `source` that attaches to
/// `destination`, scanning from the top down.
///
/// The scan stops at the first face-down card. Returns `None` for an empty
/// destination: with nothing to attach to, every depth would qualify.
#[must_use]
pub fn attach_depth(source: &Pile, destination: &Pile) -> Option<usize> {
    if destination.is_empty() {
        return None;
    }

    (1..=source.len())
        .map_while(|depth| {
            source
                .from_top(depth)
                .filter(|card| card.is_face_up())
                .map(|card| (depth, card))
        })
        .find(|(_, card)| can_stack(card, destination))
        .map(|(depth, _)| depth)
}
