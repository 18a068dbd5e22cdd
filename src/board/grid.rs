//! The board: a square token grid plus the five style cards.
//!
//! Reads and writes at invalid coordinates are tolerated: a read gives
//! `Token::Empty` and a write does nothing. That lets legality checks probe
//! arbitrary offsets without bounds checks at every call site.

use crate::cards::{standard_deal, StyleCard, StyleName};
use crate::core::config::{validate_board_size, DEFAULT_BOARD_SIZE};
use crate::core::error::{OnitamaError, Result};
use crate::core::player::PlayerId;
use crate::core::token::{Grid, Token};

/// Token grid and style cards.
///
/// Every grid handed in or out is copied; nothing outside the board can
/// alias its storage.
///
/// ## Usage
///
/// ```
/// use rust_onitama::board::Board;
/// use rust_onitama::core::Token;
///
/// let mut board = Board::new(5).unwrap();
/// assert_eq!(board.get_token(0, 2), Token::GrandmasterA);
/// assert_eq!(board.get_token(4, 0), Token::MonkB);
///
/// // Off-board reads are empty, off-board writes are ignored.
/// board.set_token(5, 0, Token::GrandmasterB);
/// assert_eq!(board.get_token(5, 0), Token::Empty);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Grid,
    styles: Vec<StyleCard>,
}

impl Board {
    /// Build the opening position on a `size` x `size` board.
    ///
    /// Fails if `size` is even or below 5.
    pub fn new(size: usize) -> Result<Self> {
        validate_board_size(size)?;
        Ok(Self {
            size,
            grid: opening_grid(size),
            styles: standard_deal(),
        })
    }

    /// Build a board from a preset grid with the opening style distribution.
    ///
    /// The grid is copied and must be `size` x `size`.
    pub fn with_grid(size: usize, grid: &[Vec<Token>]) -> Result<Self> {
        validate_board_size(size)?;
        check_shape(size, grid)?;
        Ok(Self {
            size,
            grid: grid.to_vec(),
            styles: standard_deal(),
        })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    // === Coordinates and tokens ===

    /// Whether `(row, col)` lies on the board.
    #[must_use]
    pub fn valid_coordinate(&self, row: i32, col: i32) -> bool {
        let size = self.size as i64;
        (0..size).contains(&i64::from(row)) && (0..size).contains(&i64::from(col))
    }

    /// Token at `(row, col)`, or `Token::Empty` off the board.
    #[must_use]
    pub fn get_token(&self, row: i32, col: i32) -> Token {
        if self.valid_coordinate(row, col) {
            self.grid[row as usize][col as usize]
        } else {
            Token::Empty
        }
    }

    /// Write a token at `(row, col)`. Off-board writes are ignored.
    pub fn set_token(&mut self, row: i32, col: i32, token: Token) {
        if self.valid_coordinate(row, col) {
            self.grid[row as usize][col as usize] = token;
        }
    }

    /// Coordinates of every token owned by `player`, row-major.
    #[must_use]
    pub fn tokens_of(&self, player: PlayerId) -> Vec<(i32, i32)> {
        self.cells()
            .filter(|&(_, _, token)| token.belongs_to(player))
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// First coordinate (row-major) holding `token`.
    #[must_use]
    pub fn find_token(&self, token: Token) -> Option<(i32, i32)> {
        self.cells()
            .find(|&(_, _, t)| t == token)
            .map(|(row, col, _)| (row, col))
    }

    /// Whether any cell holds `token`.
    #[must_use]
    pub fn contains(&self, token: Token) -> bool {
        self.find_token(token).is_some()
    }

    fn cells(&self) -> impl Iterator<Item = (i32, i32, Token)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &token)| (row as i32, col as i32, token))
        })
    }

    // === Grid copies ===

    /// An independent copy of the grid.
    #[must_use]
    pub fn deep_copy(&self) -> Grid {
        self.grid.clone()
    }

    /// Replace the grid with a copy of `grid`.
    ///
    /// Fails without changing anything if `grid` is not `size` x `size`.
    pub fn set_board(&mut self, grid: &[Vec<Token>]) -> Result<()> {
        check_shape(self.size, grid)?;
        self.grid = grid.to_vec();
        Ok(())
    }

    /// Put back a grid and style list taken from this board earlier.
    ///
    /// The side length follows the restored grid, which may differ from the
    /// current one if a preset of another size was installed in between.
    pub(crate) fn restore(&mut self, grid: Grid, styles: Vec<StyleCard>) {
        self.size = grid.len();
        debug_assert!(check_shape(self.size, &grid).is_ok());
        self.grid = grid;
        self.styles = styles;
    }

    // === Styles ===

    /// All five cards, in standard order.
    #[must_use]
    pub fn styles(&self) -> &[StyleCard] {
        &self.styles
    }

    /// An independent copy of the style list.
    #[must_use]
    pub fn styles_snapshot(&self) -> Vec<StyleCard> {
        self.styles.clone()
    }

    /// Replace the style list.
    ///
    /// The caller is responsible for keeping one spare card in the list.
    #[cfg(test)]
    pub(crate) fn set_styles(&mut self, styles: Vec<StyleCard>) {
        self.styles = styles;
    }

    /// The card with this name.
    #[must_use]
    pub fn style(&self, name: StyleName) -> Option<&StyleCard> {
        self.styles.iter().find(|s| s.name == name)
    }

    /// Cards owned by `player`.
    pub fn styles_of(&self, player: PlayerId) -> impl Iterator<Item = &StyleCard> + '_ {
        self.styles.iter().filter(move |s| s.is_owned_by(player))
    }

    /// The spare card, if the style list has one.
    #[must_use]
    pub fn spare_style(&self) -> Option<&StyleCard> {
        self.styles.iter().find(|s| s.is_spare())
    }

    /// Swap owners between the spare card and the card named `name`.
    ///
    /// Returns false and changes nothing if there is no spare, if `name` is
    /// the spare itself, or if no card has that name.
    pub fn exchange_style(&mut self, name: StyleName) -> bool {
        let Some(spare) = self.styles.iter().position(StyleCard::is_spare) else {
            return false;
        };
        let Some(used) = self.styles.iter().position(|s| s.name == name) else {
            return false;
        };
        if used == spare {
            return false;
        }

        self.styles[spare].owner = self.styles[used].owner;
        self.styles[used].owner = None;
        true
    }
}

impl Default for Board {
    /// The standard 5x5 opening position.
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            grid: opening_grid(DEFAULT_BOARD_SIZE),
            styles: standard_deal(),
        }
    }
}

fn opening_grid(size: usize) -> Grid {
    let mid = size / 2;
    let mut grid = vec![vec![Token::Empty; size]; size];

    grid[0] = vec![Token::MonkA; size];
    grid[0][mid] = Token::GrandmasterA;

    grid[size - 1] = vec![Token::MonkB; size];
    grid[size - 1][mid] = Token::GrandmasterB;

    grid
}

fn check_shape(size: usize, grid: &[Vec<Token>]) -> Result<()> {
    let width = grid
        .iter()
        .map(Vec::len)
        .find(|&w| w != size)
        .unwrap_or(size);

    if grid.len() != size || width != size {
        return Err(OnitamaError::GridShape {
            expected: size,
            rows: grid.len(),
            width,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::token::parse_grid;

    fn fixture() -> Grid {
        parse_grid(&["x Xxx", "     ", "   x ", " y   ", "y Yyy"]).unwrap()
    }

    #[test]
    fn test_opening_layout_all_sizes() {
        for size in [5usize, 7, 9, 11] {
            let board = Board::new(size).unwrap();
            let n = size as i32;

            for player in PlayerId::both() {
                let tokens = board.tokens_of(player);
                let gms = tokens
                    .iter()
                    .filter(|&&(r, c)| board.get_token(r, c).is_grandmaster())
                    .count();
                assert_eq!(gms, 1);
                assert_eq!(tokens.len() - gms, size - 1);
            }

            for row in 1..n - 1 {
                for col in 0..n {
                    assert_eq!(board.get_token(row, col), Token::Empty);
                }
            }
            assert_eq!(board.get_token(0, n / 2), Token::GrandmasterA);
            assert_eq!(board.get_token(n - 1, n / 2), Token::GrandmasterB);
        }
    }

    #[test]
    fn test_default_is_standard_opening() {
        assert_eq!(Board::default(), Board::new(5).unwrap());
        assert_eq!(Board::default().deep_copy(), Board::new(5).unwrap().deep_copy());
    }

    #[test]
    fn test_invalid_sizes() {
        for size in [0, 3, 4, 6, 8] {
            assert_eq!(Board::new(size), Err(OnitamaError::InvalidBoardSize { size }));
        }
    }

    #[test]
    fn test_valid_coordinate() {
        let board = Board::new(9).unwrap();
        assert!(board.valid_coordinate(0, 0));
        assert!(board.valid_coordinate(8, 8));
        assert!(!board.valid_coordinate(0, 9));
        assert!(!board.valid_coordinate(-1, 1));
        assert!(!board.valid_coordinate(i32::MIN, i32::MAX));
    }

    #[test]
    fn test_get_and_set_token() {
        let mut board = Board::with_grid(5, &fixture()).unwrap();
        assert_eq!(board.get_token(0, 5), Token::Empty);
        assert_eq!(board.get_token(0, 2), Token::GrandmasterA);
        assert_eq!(board.get_token(3, 3), Token::Empty);

        board.set_token(0, 5, Token::GrandmasterA);
        board.set_token(0, 2, Token::GrandmasterB);
        assert_eq!(board.get_token(0, 2), Token::GrandmasterB);
    }

    #[test]
    fn test_with_grid_copies_input() {
        let mut grid = fixture();
        let board = Board::with_grid(5, &grid).unwrap();
        grid[1][1] = Token::GrandmasterB;

        assert_eq!(board.get_token(1, 1), Token::Empty);
    }

    #[test]
    fn test_grid_shape_checked() {
        let short = parse_grid(&["xxXxx", "     ", "     ", "yyYyy"]).unwrap();
        assert_eq!(
            Board::with_grid(5, &short),
            Err(OnitamaError::GridShape { expected: 5, rows: 4, width: 5 })
        );

        let ragged = parse_grid(&["xxXxx", "    ", "     ", "     ", "yyYyy"]).unwrap();
        let mut board = Board::new(5).unwrap();
        let before = board.deep_copy();
        assert!(board.set_board(&ragged).is_err());
        assert_eq!(board.deep_copy(), before);
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let board = Board::new(5).unwrap();
        let mut copy = board.deep_copy();
        copy[0][0] = Token::Empty;

        assert_eq!(board.get_token(0, 0), Token::MonkA);
    }

    #[test]
    fn test_exchange_style() {
        let mut board = Board::new(5).unwrap();

        assert!(board.exchange_style(StyleName::Crab));
        assert!(board.style(StyleName::Crab).unwrap().is_spare());
        assert_eq!(board.style(StyleName::Dragon).unwrap().owner, Some(PlayerId::A));

        assert!(board.exchange_style(StyleName::Mantis));
        assert!(board.style(StyleName::Mantis).unwrap().is_spare());
        assert_eq!(board.style(StyleName::Crab).unwrap().owner, Some(PlayerId::B));

        assert_eq!(board.styles().iter().filter(|s| s.is_spare()).count(), 1);
    }

    #[test]
    fn test_exchange_spare_with_itself_fails() {
        let mut board = Board::new(5).unwrap();
        let before = board.styles_snapshot();

        assert!(!board.exchange_style(StyleName::Dragon));
        assert_eq!(board.styles(), before.as_slice());
    }

    #[test]
    fn test_exchange_without_spare_fails() {
        let mut board = Board::new(5).unwrap();
        let mut styles = board.styles_snapshot();
        for style in styles.iter_mut().filter(|s| s.is_spare()) {
            style.owner = Some(PlayerId::A);
        }
        board.set_styles(styles.clone());

        assert!(!board.exchange_style(StyleName::Crab));
        assert_eq!(board.styles(), styles.as_slice());
        assert!(board.spare_style().is_none());
    }

    #[test]
    fn test_find_token() {
        let board = Board::with_grid(5, &fixture()).unwrap();
        assert_eq!(board.find_token(Token::GrandmasterB), Some((4, 2)));
        assert_eq!(board.find_token(Token::MonkB), Some((3, 1)));
        assert!(!Board::with_grid(5, &parse_grid(&["     "; 5]).unwrap())
            .unwrap()
            .contains(Token::GrandmasterA));
    }
}
