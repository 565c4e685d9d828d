//! The Klondike board: every pile in the game, by role.
//!
//! Piles are named fields rather than one indexed collection because each
//! role carries its own rules (suit purity on foundations, face-down stock,
//! hidden cards in the tableau).

use serde::{Deserialize, Serialize};

use super::pile::{Pile, PileRef};
use crate::cards::{Card, DECK_SIZE};

/// Number of foundations (one per suit).
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// All piles of a Klondike game.
///
/// Fields are public so callers can set up positions directly; the engine
/// in `games::klondike` is the only code that enforces move legality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Face-down draw pile.
    pub stock: Pile,
    /// Face-up cards drawn from the stock.
    pub waste: Pile,
    /// One ascending pile per suit, indexed by `Suit::index`.
    pub foundations: [Pile; FOUNDATION_COUNT],
    /// The seven play columns.
    pub tableau: [Pile; TABLEAU_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty every pile.
    pub fn clear(&mut self) {
        self.stock.clear();
        self.waste.clear();
        self.foundations.iter_mut().for_each(Pile::clear);
        self.tableau.iter_mut().for_each(Pile::clear);
    }

    /// Look up a pile by reference.
    #[must_use]
    pub fn pile(&self, pile: PileRef) -> Option<&Pile> {
        match pile {
            PileRef::Stock => Some(&self.stock),
            PileRef::Waste => Some(&self.waste),
            PileRef::Foundation(i) => self.foundations.get(i),
            PileRef::Tableau(i) => self.tableau.get(i),
        }
    }

    /// Every pile with its reference, stock first.
    pub fn piles(&self) -> impl Iterator<Item = (PileRef, &Pile)> + '_ {
        let foundations = self
            .foundations
            .iter()
            .enumerate()
            .map(|(i, p)| (PileRef::Foundation(i), p));
        let tableau = self
            .tableau
            .iter()
            .enumerate()
            .map(|(i, p)| (PileRef::Tableau(i), p));

        [(PileRef::Stock, &self.stock), (PileRef::Waste, &self.waste)]
            .into_iter()
            .chain(foundations)
            .chain(tableau)
    }

    /// Every card on the board, in pile order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.piles().flat_map(|(_, pile)| pile.cards().iter())
    }

    /// Total cards across all piles. Always `DECK_SIZE` once dealt.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles().map(|(_, pile)| pile.len()).sum()
    }

    /// True when no pile holds a card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card_count() == 0
    }

    /// True when the board holds exactly one of each of the 52 cards.
    #[must_use]
    pub fn is_complete_deck(&self) -> bool {
        let mut seen = [false; DECK_SIZE];
        for card in self.cards() {
            let slot = &mut seen[card.index() as usize];
            if *slot {
                return false;
            }
            *slot = true;
        }
        seen.iter().all(|&s| s)
    }

    /// Read-only snapshot for presentation layers.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView {
            stock_count: self.stock.len(),
            waste_count: self.waste.len(),
            waste_top: self.waste.top().copied(),
            foundation_tops: std::array::from_fn(|i| self.foundations[i].top().copied()),
            tableau: std::array::from_fn(|i| self.tableau[i].cards().to_vec()),
        }
    }
}

/// Owned snapshot of what a player can see.
///
/// Tableau columns are given in full (bottom first) with face state, so
/// renderers decide how to draw hidden cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub stock_count: usize,
    pub waste_count: usize,
    pub waste_top: Option<Card>,
    pub foundation_tops: [Option<Card>; FOUNDATION_COUNT],
    pub tableau: [Vec<Card>; TABLEAU_COUNT],
}

fn cell(card: Option<&Card>) -> String {
    match card {
        Some(c) if c.is_face_up() => c.to_string(),
        Some(_) => "##".to_string(),
        None => "  ".to_string(),
    }
}

impl std::fmt::Display for Board {
    /// Text layout with pile labels matching the move notation:
    /// `d` stock, `7` waste, `8`-`b` foundations, `0`-`6` tableau.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "d  7     8  9  a  b")?;

        let foundations: Vec<String> = self
            .foundations
            .iter()
            .map(|p| cell(p.top()))
            .collect();
        writeln!(
            f,
            "{:02} {}    {}",
            self.stock.len(),
            cell(self.waste.top()),
            foundations.join(" ")
        )?;

        let depth = self.tableau.iter().map(Pile::len).max().unwrap_or(0);
        for row in 0..depth {
            let cells: Vec<String> = self
                .tableau
                .iter()
                .map(|p| cell(p.cards().get(row)))
                .collect();
            writeln!(f, "{}", cells.join(" ").trim_end())?;
        }

        write!(f, "0  1  2  3  4  5  6")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{canonical_deck, Suit};

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.card_count(), 0);
        assert!(!board.is_complete_deck());
        assert_eq!(board.piles().count(), 2 + FOUNDATION_COUNT + TABLEAU_COUNT);
    }

    #[test]
    fn test_complete_deck_detection() {
        let mut board = Board::new();
        for card in canonical_deck() {
            board.stock.push(card);
        }
        assert_eq!(board.card_count(), DECK_SIZE);
        assert!(board.is_complete_deck());

        // Swap one card for a duplicate
        board.stock.pop();
        board.stock.push(Card::from_index(0));
        assert_eq!(board.card_count(), DECK_SIZE);
        assert!(!board.is_complete_deck());
    }

    #[test]
    fn test_pile_lookup() {
        let mut board = Board::new();
        board.tableau[3].push(Card::new(9, Suit::Hearts));

        assert_eq!(board.pile(PileRef::Tableau(3)).map(Pile::len), Some(1));
        assert!(board.pile(PileRef::Tableau(7)).is_none());
        assert!(board.pile(PileRef::Foundation(4)).is_none());
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new();
        board.stock.push(Card::from_index(1));
        board.foundations[0].push(Card::from_index(0));
        board.tableau[6].push(Card::from_index(2));

        board.clear();
        assert!(board.is_empty());
    }

    #[test]
    fn test_view() {
        let mut board = Board::new();
        board.stock.push(Card::from_index(20));
        board.waste.push(Card::new(4, Suit::Clubs).turned_up());
        board.foundations[1].push(Card::new(1, Suit::Diamonds).turned_up());
        board.tableau[0].push(Card::new(8, Suit::Spades));
        board.tableau[0].push(Card::new(3, Suit::Hearts).turned_up());

        let view = board.view();
        assert_eq!(view.stock_count, 1);
        assert_eq!(view.waste_count, 1);
        assert_eq!(view.waste_top.map(|c| c.rank()), Some(4));
        assert_eq!(view.foundation_tops[0], None);
        assert_eq!(view.foundation_tops[1].map(|c| c.suit()), Some(Suit::Diamonds));
        assert_eq!(view.tableau[0].len(), 2);
        assert!(!view.tableau[0][0].is_face_up());
        assert!(view.tableau[1].is_empty());

        let json = serde_json::to_string(&view).unwrap();
        let restored: BoardView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, restored);
    }

    #[test]
    fn test_deserialize_rejects_out_of_deck_card() {
        let mut board = Board::new();
        board.tableau[3].push(Card::new(13, Suit::Hearts).turned_up());
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        let bad = json.replace(r#""rank":13"#, r#""rank":14"#);
        assert_ne!(bad, json);
        assert!(serde_json::from_str::<Board>(&bad).is_err());
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new();
        board.stock.push(Card::from_index(20));
        board.waste.push(Card::new(4, Suit::Clubs).turned_up());
        board.foundations[0].push(Card::new(1, Suit::Spades).turned_up());
        board.tableau[0].push(Card::new(8, Suit::Spades));
        board.tableau[0].push(Card::new(3, Suit::Hearts).turned_up());
        board.tableau[2].push(Card::new(13, Suit::Clubs).turned_up());

        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "d  7     8  9  a  b");
        assert!(lines[1].starts_with("01 4♣    A♠"));
        assert_eq!(lines[2], "##    K♣");
        assert_eq!(lines[3], "3♥");
        assert_eq!(lines[4], "0  1  2  3  4  5  6");
    }
}
