//! The game engine: turn order, move validation and application, win
//! detection, and undo.
//!
//! A move and the exchange of the style it used form one transaction. Either
//! both happen (and a snapshot of the prior state is pushed for undo) or
//! nothing changes at all.

use im::Vector;
use tracing::{debug, error, instrument};

use super::turns::required_offset;
use crate::board::Board;
use crate::cards::{StyleCard, StyleName};
use crate::core::action::{Turn, TurnRecord};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::player::PlayerId;
use crate::core::token::{Grid, Token};
use crate::history::HistoryStack;

/// The opponent of a registered player.
const fn opponent(player: PlayerId) -> PlayerId {
    if player.0 == PlayerId::A.0 {
        PlayerId::B
    } else {
        PlayerId::A
    }
}

/// Authoritative game state.
///
/// The engine is the only thing that mutates its board and history. Every
/// grid or style list it hands out is a copy.
///
/// ## Example
///
/// ```
/// use rust_onitama::cards::StyleName;
/// use rust_onitama::core::PlayerId;
/// use rust_onitama::rules::GameEngine;
///
/// let mut game = GameEngine::default();
///
/// assert!(game.make_move(0, 2, 1, 2, StyleName::Crab));
/// assert_eq!(game.whose_turn(), PlayerId::B);
///
/// // Crab went to the spare slot; A picked up the dragon.
/// assert!(!game.make_move(4, 2, 3, 2, StyleName::Crab));
/// assert!(game.make_move(4, 2, 3, 1, StyleName::Mantis));
///
/// game.undo();
/// game.undo();
/// assert_eq!(game.get_board(), GameEngine::default().get_board());
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    whose_turn: PlayerId,
    history: HistoryStack,
    move_log: Vector<TurnRecord>,
}

impl Default for GameEngine {
    /// Standard 5x5 game, player A to move.
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            whose_turn: config.first_player,
            config,
            board: Board::default(),
            history: HistoryStack::new(),
            move_log: Vector::new(),
        }
    }
}

impl GameEngine {
    /// Start a game from a configuration.
    ///
    /// Fails on an invalid board size or an unknown opening player.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.board_size)?;
        Ok(Self {
            whose_turn: config.first_player,
            config,
            board,
            history: HistoryStack::new(),
            move_log: Vector::new(),
        })
    }

    /// Start a game on a `size` x `size` board with the default settings.
    pub fn with_size(size: usize) -> Result<Self> {
        Self::new(GameConfig::new().with_board_size(size))
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only access to the live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// The player to move.
    #[must_use]
    pub fn whose_turn(&self) -> PlayerId {
        self.whose_turn
    }

    /// Token at a position; `Token::Empty` off the board.
    #[must_use]
    pub fn get_token(&self, row: i32, col: i32) -> Token {
        self.board.get_token(row, col)
    }

    /// A copy of the grid.
    #[must_use]
    pub fn get_board(&self) -> Grid {
        self.board.deep_copy()
    }

    /// Copies of all five style cards.
    #[must_use]
    pub fn get_styles(&self) -> Vec<StyleCard> {
        self.board.styles_snapshot()
    }

    /// Number of moves that can be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Applied turns, oldest first. Undone turns are removed.
    #[must_use]
    pub fn move_log(&self) -> &Vector<TurnRecord> {
        &self.move_log
    }

    /// The other registered player, or `None` for an unknown identity.
    #[must_use]
    pub fn other_player(&self, player: PlayerId) -> Option<PlayerId> {
        player.is_registered().then(|| opponent(player))
    }

    // === Legality ===

    /// Whether moving from origin to destination is allowed for the player to
    /// move, ignoring styles.
    ///
    /// Both squares must be on the board, the origin must hold one of the
    /// mover's tokens, and the destination must not. Landing on an opposing
    /// token is a capture.
    #[must_use]
    pub fn is_legal_move(&self, row_o: i32, col_o: i32, row_d: i32, col_d: i32) -> bool {
        self.board.valid_coordinate(row_o, col_o)
            && self.board.valid_coordinate(row_d, col_d)
            && self.board.get_token(row_o, col_o).belongs_to(self.whose_turn)
            && !self.board.get_token(row_d, col_d).belongs_to(self.whose_turn)
    }

    // === Moves ===

    /// Move a token for the player to move using one of their styles.
    ///
    /// Returns false, with no state change, if the squares are illegal, the
    /// mover does not own `style`, or the style has no matching offset. On
    /// success the used style is swapped with the spare, the token moves
    /// (capturing anything at the destination), and the turn passes.
    #[instrument(level = "debug", skip(self), fields(player = %self.whose_turn))]
    pub fn make_move(
        &mut self,
        row_o: i32,
        col_o: i32,
        row_d: i32,
        col_d: i32,
        style: StyleName,
    ) -> bool {
        if !self.is_legal_move(row_o, col_o, row_d, col_d) {
            debug!("rejected: origin or destination not allowed");
            return false;
        }

        let player = self.whose_turn;
        let offset = required_offset(player, (row_o, col_o), (row_d, col_d));

        let Some(card) = self.board.styles_of(player).find(|s| s.name == style) else {
            debug!("rejected: style not owned by mover");
            return false;
        };
        if !card.allows(offset) {
            debug!(?offset, "rejected: offset not in style");
            return false;
        }
        if self.board.spare_style().is_none() {
            error!("no spare style on the board; refusing move");
            return false;
        }

        self.history.push(self.board.deep_copy(), self.board.styles_snapshot());
        let exchanged = self.board.exchange_style(style);
        debug_assert!(exchanged);

        let token = self.board.get_token(row_o, col_o);
        let captured = self.board.get_token(row_d, col_d);
        self.board.set_token(row_d, col_d, token);
        self.board.set_token(row_o, col_o, Token::Empty);

        let turn = Turn::new((row_o, col_o), (row_d, col_d), style, player);
        let ply = self.move_log.len() as u32;
        self.move_log.push_back(TurnRecord::new(turn, ply));
        self.whose_turn = opponent(player);

        debug!(ply, ?captured, "move applied");
        true
    }

    /// Apply a proposed turn.
    ///
    /// Rejects turns proposed on behalf of a player who is not on the move.
    pub fn apply_turn(&mut self, turn: &Turn) -> bool {
        if turn.player != self.whose_turn {
            debug!(%turn, "rejected: not this player's turn");
            return false;
        }
        self.make_move(turn.row_o, turn.col_o, turn.row_d, turn.col_d, turn.style)
    }

    /// Revert the most recent move, if any.
    ///
    /// Restores the grid and styles verbatim and hands the turn back. If a
    /// preset of another size was installed since that move, the board size
    /// reverts with the grid. Returns whether anything was undone.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };

        self.board.restore(snapshot.grid, snapshot.styles);
        self.config.board_size = self.board.size();
        self.move_log.pop_back();
        self.whose_turn = opponent(self.whose_turn);

        debug!(remaining = self.history.len(), "move undone");
        true
    }

    // === Outcome ===

    /// The winner, if the game is over.
    ///
    /// Checked in order:
    /// 1. A's grandmaster on B's home square `(size - 1, size / 2)`: A wins.
    /// 2. B's grandmaster on A's home square `(0, size / 2)`: B wins.
    /// 3. The player to move has no grandmaster left: the other player wins.
    ///
    /// Step 3 only looks at the player about to move, so a capture is seen
    /// right after the move that made it. Asking at any other point (for
    /// instance after editing the board by hand) may miss a missing
    /// grandmaster on the other side.
    #[must_use]
    pub fn get_winner(&self) -> Option<PlayerId> {
        let last = self.board.size() as i32 - 1;
        let mid = self.board.size() as i32 / 2;

        if self.board.get_token(last, mid) == Token::GrandmasterA {
            return Some(PlayerId::A);
        }
        if self.board.get_token(0, mid) == Token::GrandmasterB {
            return Some(PlayerId::B);
        }

        let to_move = self.whose_turn;
        if !self.board.contains(Token::grandmaster(to_move)) {
            return Some(opponent(to_move));
        }
        None
    }

    /// Whether someone has won.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.get_winner().is_some()
    }

    // === Fixtures ===

    /// Replace the board with a preset grid and the opening style
    /// distribution.
    ///
    /// Whose turn it is and the undo history are kept. On error nothing
    /// changes.
    #[instrument(level = "debug", skip(self, grid))]
    pub fn set_board(&mut self, size: usize, grid: &[Vec<Token>]) -> Result<()> {
        self.board = Board::with_grid(size, grid)?;
        self.config.board_size = size;
        Ok(())
    }

    // === Display ===

    /// Text picture of the board.
    #[must_use]
    pub fn board_string(&self) -> String {
        self.board.to_string()
    }

    /// Text listing of both players' styles and the spare.
    #[must_use]
    pub fn styles_string(&self) -> String {
        let mut out = String::new();
        for player in PlayerId::both() {
            out.push_str(&format!("{player} styles:\n"));
            for style in self.board.styles_of(player) {
                out.push_str(&format!("{style}\n"));
            }
        }
        out.push_str("Spare style:\n");
        if let Some(spare) = self.board.spare_style() {
            out.push_str(&format!("{spare}\n"));
        }
        out
    }
}
