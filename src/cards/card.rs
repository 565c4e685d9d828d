//! Playing cards.
//!
//! A `Card` has a fixed identity (rank and suit, with colour derived from
//! the suit) and one piece of mutable state: whether it is face up.
//!
//! ## Index Layout
//!
//! The 52 cards of a deck are indexed `0..52` in canonical order:
//! `suit = index / 13`, `rank = index % 13 + 1`. So index 0 is the Ace of
//! Spades and index 51 is the King of Hearts.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Rank of an Ace.
pub const ACE: u8 = 1;

/// Rank of a King.
pub const KING: u8 = 13;

/// Card suit. Discriminants match the foundation each suit builds on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades = 0,
    Diamonds = 1,
    Clubs = 2,
    Hearts = 3,
}

impl Suit {
    /// All suits in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    /// Suit for a foundation index. Returns `None` outside `0..4`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Suit> {
        match index {
            0 => Some(Suit::Spades),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Clubs),
            3 => Some(Suit::Hearts),
            _ => None,
        }
    }

    /// Foundation index for this suit.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Colour of this suit: even suits are black, odd suits red.
    #[must_use]
    pub const fn color(self) -> Color {
        if self.index() % 2 == 0 {
            Color::Black
        } else {
            Color::Red
        }
    }

    /// Single-glyph symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
        }
    }
}

/// Card colour, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// A playing card.
///
/// ```
/// use rust_klondike::cards::{Card, Color, Suit};
///
/// let mut card = Card::from_index(14); // Two of Diamonds
/// assert_eq!(card.rank(), 2);
/// assert_eq!(card.suit(), Suit::Diamonds);
/// assert_eq!(card.color(), Color::Red);
/// assert!(!card.is_face_up());
///
/// card.flip_up();
/// assert!(card.is_face_up());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    rank: u8,
    suit: Suit,
    face_up: bool,
}

/// Rank outside `1..=13` in serialized card data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[display("rank must be 1-13, got {rank}")]
pub struct InvalidRank {
    pub rank: u8,
}

impl std::error::Error for InvalidRank {}

/// Unchecked wire form of a `Card`.
#[derive(Deserialize)]
struct RawCard {
    rank: u8,
    suit: Suit,
    face_up: bool,
}

impl TryFrom<RawCard> for Card {
    type Error = InvalidRank;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        if !(ACE..=KING).contains(&raw.rank) {
            return Err(InvalidRank { rank: raw.rank });
        }
        Ok(Self {
            rank: raw.rank,
            suit: raw.suit,
            face_up: raw.face_up,
        })
    }
}

impl Card {
    /// Create a face-down card from its canonical deck index.
    ///
    /// Panics if `index >= 52`.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        assert!(
            (index as usize) < DECK_SIZE,
            "Card index must be below {}, got {}",
            DECK_SIZE,
            index
        );
        let suit = Suit::ALL[(index / RANKS_PER_SUIT) as usize];
        Self::new(index % RANKS_PER_SUIT + 1, suit)
    }

    /// Create a face-down card from rank and suit.
    ///
    /// Panics if `rank` is not in `1..=13`.
    #[must_use]
    pub fn new(rank: u8, suit: Suit) -> Self {
        assert!((ACE..=KING).contains(&rank), "Rank must be 1-13, got {}", rank);
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Return this card turned face up.
    #[must_use]
    pub fn turned_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Canonical deck index (inverse of `from_index`).
    #[must_use]
    pub fn index(&self) -> u8 {
        self.suit as u8 * RANKS_PER_SUIT + self.rank - 1
    }

    #[must_use]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turn the card face up. No effect if it already is.
    pub fn flip_up(&mut self) {
        self.face_up = true;
    }

    /// Turn the card face down. No effect if it already is.
    pub fn flip_down(&mut self) {
        self.face_up = false;
    }

    /// Rank letter used in text output.
    #[must_use]
    pub fn rank_symbol(&self) -> char {
        match self.rank {
            1 => 'A',
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            r => char::from(b'0' + r),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_symbol(), self.suit.symbol())
    }
}

/// All 52 cards in canonical index order, face down.
#[must_use]
pub fn canonical_deck() -> Vec<Card> {
    (0..DECK_SIZE as u8).map(Card::from_index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_layout() {
        let ace_spades = Card::from_index(0);
        assert_eq!(ace_spades.rank(), ACE);
        assert_eq!(ace_spades.suit(), Suit::Spades);

        let king_spades = Card::from_index(12);
        assert_eq!(king_spades.rank(), KING);
        assert_eq!(king_spades.suit(), Suit::Spades);

        let ace_diamonds = Card::from_index(13);
        assert_eq!(ace_diamonds.rank(), ACE);
        assert_eq!(ace_diamonds.suit(), Suit::Diamonds);

        let king_hearts = Card::from_index(51);
        assert_eq!(king_hearts.rank(), KING);
        assert_eq!(king_hearts.suit(), Suit::Hearts);
    }

    #[test]
    fn test_color_follows_suit_parity() {
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Hearts.color(), Color::Red);

        for index in 0..52u8 {
            let card = Card::from_index(index);
            let expected = if (index / 13) % 2 == 0 { Color::Black } else { Color::Red };
            assert_eq!(card.color(), expected);
        }
    }

    #[test]
    fn test_index_round_trip() {
        for index in 0..52u8 {
            assert_eq!(Card::from_index(index).index(), index);
        }
    }

    #[test]
    fn test_canonical_deck_unique() {
        let deck = canonical_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert!(deck.iter().all(|c| !c.is_face_up()));

        let mut keys: Vec<_> = deck.iter().map(|c| (c.suit(), c.rank())).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), DECK_SIZE);
    }

    #[test]
    fn test_flip_is_idempotent() {
        let mut card = Card::new(7, Suit::Clubs);
        assert!(!card.is_face_up());

        card.flip_up();
        card.flip_up();
        assert!(card.is_face_up());

        card.flip_down();
        card.flip_down();
        assert!(!card.is_face_up());
    }

    #[test]
    #[should_panic(expected = "Card index")]
    fn test_invalid_index_panics() {
        let _ = Card::from_index(52);
    }

    #[test]
    #[should_panic(expected = "Rank")]
    fn test_invalid_rank_panics() {
        let _ = Card::new(0, Suit::Hearts);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(1, Suit::Spades).to_string(), "A♠");
        assert_eq!(Card::new(10, Suit::Hearts).to_string(), "T♥");
        assert_eq!(Card::new(7, Suit::Diamonds).to_string(), "7♦");
        assert_eq!(Card::new(13, Suit::Clubs).to_string(), "K♣");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(12, Suit::Hearts).turned_up();
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_bad_rank() {
        for rank in [0u8, 14, 255] {
            let json = format!(r#"{{"rank":{},"suit":"Hearts","face_up":true}}"#, rank);
            let err = serde_json::from_str::<Card>(&json).unwrap_err();
            assert!(err.to_string().contains("rank must be 1-13"), "{}", err);
        }

        let ok = r#"{"rank":13,"suit":"Hearts","face_up":false}"#;
        assert_eq!(serde_json::from_str::<Card>(ok).unwrap(), Card::new(13, Suit::Hearts));
    }
}
