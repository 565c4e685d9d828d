//! Ordered card piles.
//!
//! A `Pile` is a sequence of cards where index 0 is the bottom and the last
//! element is the top (the accessible card). Storage is inline: no Klondike
//! pile ever holds more than `PILE_INLINE` cards (a full stock).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Inline capacity of a pile. The stock starts with 24 cards and no other
/// pile can grow past that.
pub const PILE_INLINE: usize = 24;

/// Cards lifted off a pile as one unit.
pub type Run = SmallVec<[Card; PILE_INLINE]>;

/// Identifies a pile on the board, for errors and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRef {
    Stock,
    Waste,
    Foundation(usize),
    Tableau(usize),
}

impl std::fmt::Display for PileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileRef::Stock => write!(f, "stock"),
            PileRef::Waste => write!(f, "waste"),
            PileRef::Foundation(i) => write!(f, "foundation {}", i),
            PileRef::Tableau(i) => write!(f, "tableau {}", i),
        }
    }
}

/// An ordered pile of cards, bottom first.
///
/// ```
/// use rust_klondike::cards::{Card, Suit};
/// use rust_klondike::zones::Pile;
///
/// let mut pile = Pile::new();
/// pile.push(Card::new(5, Suit::Hearts));
/// pile.push(Card::new(4, Suit::Spades));
///
/// assert_eq!(pile.len(), 2);
/// assert_eq!(pile.top().map(|c| c.rank()), Some(4));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: Run,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The accessible card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The card `depth` positions from the top (1 = top card).
    ///
    /// Returns `None` for depth 0 or a depth past the bottom.
    #[must_use]
    pub fn from_top(&self, depth: usize) -> Option<&Card> {
        if depth == 0 || depth > self.cards.len() {
            return None;
        }
        self.cards.get(self.cards.len() - depth)
    }

    /// The top `depth` cards, bottom of the run first.
    ///
    /// Returns an empty slice if `depth` exceeds the pile.
    #[must_use]
    pub fn top_run(&self, depth: usize) -> &[Card] {
        if depth > self.cards.len() {
            return &[];
        }
        &self.cards[self.cards.len() - depth..]
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove the top `depth` cards as one run, preserving their order.
    ///
    /// Takes the whole pile if `depth` exceeds it.
    pub fn take_top(&mut self, depth: usize) -> Run {
        let start = self.cards.len().saturating_sub(depth);
        self.cards.drain(start..).collect()
    }

    /// Place a run on top, preserving its order.
    pub fn place(&mut self, run: impl IntoIterator<Item = Card>) {
        self.cards.extend(run);
    }

    /// Turn the top card face up, if there is one.
    pub fn reveal_top(&mut self) {
        if let Some(card) = self.cards.last_mut() {
            card.flip_up();
        }
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Remove every card, returning them bottom first.
    pub fn take_all(&mut self) -> Run {
        std::mem::take(&mut self.cards)
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
