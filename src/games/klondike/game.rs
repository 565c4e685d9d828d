//! Klondike game implementation.

use tracing::{debug, instrument, trace};

use super::command::{BuildSource, Command, PlaySource};
use crate::cards::{canonical_deck, KING};
use crate::core::{DrawCount, GameRng, KlondikeConfig, RuleError};
use crate::rules::{attach_depth, can_build, can_stack, is_valid_run};
use crate::zones::{Board, BoardView, Pile, PileRef, TABLEAU_COUNT};

/// A single Klondike game: configuration plus the board it owns.
///
/// Every move has two forms. `try_*` methods return the reason a move was
/// refused; the plain forms (`build`, `play`, `move_cards`) return `true`
/// if the move was applied. Either way a refused move leaves the board
/// untouched.
///
/// ```
/// use rust_klondike::games::klondike::{BuildSource, KlondikeBuilder};
///
/// let mut game = KlondikeBuilder::new().build(7);
/// assert_eq!(game.board().card_count(), 52);
///
/// game.discard();
/// let _ = game.build(BuildSource::Waste);
/// assert!(!game.won());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Klondike {
    config: KlondikeConfig,
    board: Board,
}

/// Builder for creating a dealt Klondike game.
#[derive(Clone, Debug, Default)]
pub struct KlondikeBuilder {
    config: KlondikeConfig,
}

impl KlondikeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: KlondikeConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn draw_count(mut self, draw_count: DrawCount) -> Self {
        self.config.draw_count = draw_count;
        self
    }

    #[must_use]
    pub fn strict_runs(mut self, strict: bool) -> Self {
        self.config.strict_runs = strict;
        self
    }

    /// Build the game and deal it from `seed`.
    #[must_use]
    pub fn build(self, seed: u64) -> Klondike {
        self.build_with(&mut GameRng::new(seed))
    }

    /// Build the game and deal it from an existing RNG stream.
    #[must_use]
    pub fn build_with(self, rng: &mut GameRng) -> Klondike {
        let mut game = Klondike::new(self.config);
        game.deal_fresh(rng);
        game
    }
}

impl Klondike {
    /// Create a game with an empty board. Call `deal` to start playing.
    #[must_use]
    pub fn new(config: KlondikeConfig) -> Self {
        Self {
            config,
            board: Board::new(),
        }
    }

    /// Create a game around an existing position.
    #[must_use]
    pub fn with_board(config: KlondikeConfig, board: Board) -> Self {
        Self { config, board }
    }

    #[must_use]
    pub fn config(&self) -> &KlondikeConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        self.board.view()
    }

    // === Setup ===

    /// Empty every pile.
    pub fn clear(&mut self) {
        self.board.clear();
    }

    /// Shuffle a fresh deck with `rng` and lay out the opening position.
    ///
    /// The board must be empty (new or cleared); otherwise nothing happens
    /// and `BoardNotEmpty` is returned.
    #[instrument(skip(self, rng), fields(seed = rng.seed()))]
    pub fn deal(&mut self, rng: &mut GameRng) -> Result<(), RuleError> {
        if !self.board.is_empty() {
            trace!("deal refused, board still holds cards");
            return Err(RuleError::BoardNotEmpty);
        }
        self.deal_fresh(rng);
        Ok(())
    }

    /// Deal onto a board known to be empty.
    fn deal_fresh(&mut self, rng: &mut GameRng) {
        let mut cards = canonical_deck();
        rng.shuffle(&mut cards);

        // Column i takes i + 1 cards off the end of the shuffled deck
        for (column, pile) in self.board.tableau.iter_mut().enumerate() {
            for _ in 0..=column {
                if let Some(card) = cards.pop() {
                    pile.push(card);
                }
            }
            pile.reveal_top();
        }

        self.board.stock = cards.into_iter().collect();
        debug!(stock = self.board.stock.len(), "dealt new game");
    }

    // === Draw cycle ===

    /// Turn up to one batch of cards from the stock onto the waste.
    ///
    /// Returns whether the waste now holds any card, which is not the same
    /// as whether this call moved anything.
    pub fn discard(&mut self) -> bool {
        let batch = self.config.draw_count.batch();
        let mut moved = 0;
        for _ in 0..batch {
            let Some(mut card) = self.board.stock.pop() else {
                break;
            };
            card.flip_up();
            self.board.waste.push(card);
            moved += 1;
        }
        trace!(moved, waste = self.board.waste.len(), "discard");
        !self.board.waste.is_empty()
    }

    /// Turn the waste back over into the stock.
    ///
    /// Only allowed once the stock is empty. Returns whether the stock now
    /// holds any card.
    pub fn restock(&mut self) -> bool {
        if !self.board.stock.is_empty() {
            trace!(stock = self.board.stock.len(), "restock refused, stock not empty");
            return false;
        }

        let waste = self.board.waste.take_all();
        self.board.stock = waste
            .into_iter()
            .rev()
            .map(|mut card| {
                card.flip_down();
                card
            })
            .collect();

        debug!(stock = self.board.stock.len(), "restocked");
        !self.board.stock.is_empty()
    }

    /// Discard if the stock has cards, otherwise restock.
    pub fn draw(&mut self) -> Result<(), RuleError> {
        let drawn = if self.board.stock.is_empty() {
            self.restock()
        } else {
            self.discard()
        };
        if drawn {
            Ok(())
        } else {
            Err(RuleError::NothingToDraw)
        }
    }

    // === Moves ===

    /// Move the top card of `source` to its suit's foundation.
    pub fn try_build(&mut self, source: BuildSource) -> Result<(), RuleError> {
        let from = source.pile();
        let pile = self.source_pile(from)?;
        let card = *pile.top().ok_or(RuleError::EmptyPile { pile: from })?;

        let foundation = card.suit().index();
        if !can_build(&card, &self.board.foundations[foundation]) {
            return Err(RuleError::FoundationMismatch { foundation });
        }

        if let Some(card) = self.pile_mut(from).pop() {
            self.board.foundations[foundation].push(card);
        }
        if let BuildSource::Tableau(column) = source {
            self.board.tableau[column].reveal_top();
        }

        debug!(%card, %from, foundation, "build");
        Ok(())
    }

    /// `try_build`, reporting only whether the move was applied.
    pub fn build(&mut self, source: BuildSource) -> bool {
        applied(self.try_build(source), "build")
    }

    /// Move the top card of a foundation or the waste onto a tableau column.
    pub fn try_play(&mut self, source: PlaySource, destination: usize) -> Result<(), RuleError> {
        let from = source.pile();
        let pile = self.source_pile(from)?;
        let target = self
            .board
            .tableau
            .get(destination)
            .ok_or(RuleError::DestinationOutOfRange { index: destination })?;
        let card = *pile.top().ok_or(RuleError::EmptyPile { pile: from })?;

        let to = PileRef::Tableau(destination);
        if !can_stack(&card, target) {
            return Err(RuleError::CannotStack { pile: to });
        }

        if let Some(card) = self.pile_mut(from).pop() {
            self.board.tableau[destination].push(card);
        }

        debug!(%card, %from, %to, "play");
        Ok(())
    }

    /// `try_play`, reporting only whether the move was applied.
    pub fn play(&mut self, source: PlaySource, destination: usize) -> bool {
        applied(self.try_play(source, destination), "play")
    }

    /// Move the top `depth` cards of one tableau column onto another.
    ///
    /// Only the card landing on `destination` is checked against it. The
    /// lifted cards themselves are checked only when `strict_runs` is on.
    pub fn try_move(
        &mut self,
        source: usize,
        destination: usize,
        depth: usize,
    ) -> Result<(), RuleError> {
        self.check_columns(source, destination)?;

        let from = &self.board.tableau[source];
        let len = from.len();
        if len == 0 {
            return Err(RuleError::EmptyPile {
                pile: PileRef::Tableau(source),
            });
        }
        if depth == 0 || depth > len {
            return Err(RuleError::InvalidDepth { depth, len });
        }

        let run = from.top_run(depth);
        if self.config.strict_runs && !is_valid_run(run) {
            return Err(RuleError::BrokenRun {
                pile: PileRef::Tableau(source),
            });
        }
        let bottom = run[0];
        if !can_stack(&bottom, &self.board.tableau[destination]) {
            return Err(RuleError::CannotStack {
                pile: PileRef::Tableau(destination),
            });
        }

        let run = self.board.tableau[source].take_top(depth);
        self.board.tableau[destination].place(run);
        self.board.tableau[source].reveal_top();

        debug!(%bottom, source, destination, depth, "move");
        Ok(())
    }

    /// `try_move`, reporting only whether the move was applied.
    pub fn move_cards(&mut self, source: usize, destination: usize, depth: usize) -> bool {
        applied(self.try_move(source, destination, depth), "move")
    }

    /// Move the shallowest face-up run of `source` that fits on
    /// `destination`.
    ///
    /// Never looks past a face-down card, and refuses empty destinations
    /// since any depth would fit there.
    pub fn move_auto(&mut self, source: usize, destination: usize) -> Result<(), RuleError> {
        self.check_columns(source, destination)?;

        let from = &self.board.tableau[source];
        if from.is_empty() {
            return Err(RuleError::EmptyPile {
                pile: PileRef::Tableau(source),
            });
        }
        let depth = attach_depth(from, &self.board.tableau[destination]).ok_or(
            RuleError::NoAttachPoint {
                pile: PileRef::Tableau(source),
            },
        )?;

        self.try_move(source, destination, depth)
    }

    /// Apply one command.
    pub fn apply(&mut self, command: &Command) -> Result<(), RuleError> {
        let result = match *command {
            Command::Draw => self.draw(),
            Command::Build(source) => self.try_build(source),
            Command::Play(source, destination) => self.try_play(source, destination),
            Command::Move {
                source,
                destination,
                depth: Some(depth),
            } => self.try_move(source, destination, depth),
            Command::Move {
                source,
                destination,
                depth: None,
            } => self.move_auto(source, destination),
        };
        if let Err(err) = &result {
            trace!(?command, %err, "command rejected");
        }
        result
    }

    // === Win detection ===

    /// True once every foundation is topped by a King.
    #[must_use]
    pub fn won(&self) -> bool {
        self.board
            .foundations
            .iter()
            .all(|f| f.top().is_some_and(|card| card.rank() == KING))
    }

    // === Helpers ===

    fn source_pile(&self, pile: PileRef) -> Result<&Pile, RuleError> {
        let index = match pile {
            PileRef::Foundation(i) | PileRef::Tableau(i) => i,
            PileRef::Stock | PileRef::Waste => 0,
        };
        self.board
            .pile(pile)
            .ok_or(RuleError::SourceOutOfRange { index })
    }

    /// Mutable pile lookup for a reference already validated by
    /// `source_pile`.
    fn pile_mut(&mut self, pile: PileRef) -> &mut Pile {
        match pile {
            PileRef::Stock => &mut self.board.stock,
            PileRef::Waste => &mut self.board.waste,
            PileRef::Foundation(i) => &mut self.board.foundations[i],
            PileRef::Tableau(i) => &mut self.board.tableau[i],
        }
    }

    fn check_columns(&self, source: usize, destination: usize) -> Result<(), RuleError> {
        if source >= TABLEAU_COUNT {
            return Err(RuleError::SourceOutOfRange { index: source });
        }
        if destination >= TABLEAU_COUNT {
            return Err(RuleError::DestinationOutOfRange { index: destination });
        }
        if source == destination {
            return Err(RuleError::SameColumn { column: source });
        }
        Ok(())
    }
}

fn applied(result: Result<(), RuleError>, what: &'static str) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            trace!(%err, what, "move rejected");
            false
        }
    }
}
