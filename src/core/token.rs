//! Board tokens and grids.
//!
//! A `Token` is one of five values; there is no way to put anything else on
//! the board. The character form (`' '`, `x`, `X`, `y`, `Y`) is used for
//! fixtures and text output only.

use serde::{Deserialize, Serialize};

use super::error::{OnitamaError, Result};
use super::player::PlayerId;

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Nothing there.
    #[default]
    Empty,
    /// Player A's monk (`x`).
    MonkA,
    /// Player A's grandmaster (`X`).
    GrandmasterA,
    /// Player B's monk (`y`).
    MonkB,
    /// Player B's grandmaster (`Y`).
    GrandmasterB,
}

/// Square matrix of tokens, indexed `[row][col]`.
pub type Grid = Vec<Vec<Token>>;

impl Token {
    /// The monk token for a player. Unknown players get `Empty`.
    #[must_use]
    pub const fn monk(player: PlayerId) -> Self {
        match player {
            PlayerId::A => Token::MonkA,
            PlayerId::B => Token::MonkB,
            _ => Token::Empty,
        }
    }

    /// The grandmaster token for a player. Unknown players get `Empty`.
    #[must_use]
    pub const fn grandmaster(player: PlayerId) -> Self {
        match player {
            PlayerId::A => Token::GrandmasterA,
            PlayerId::B => Token::GrandmasterB,
            _ => Token::Empty,
        }
    }

    /// The player this token belongs to, if any.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Token::Empty => None,
            Token::MonkA | Token::GrandmasterA => Some(PlayerId::A),
            Token::MonkB | Token::GrandmasterB => Some(PlayerId::B),
        }
    }

    /// Whether this token belongs to `player`.
    #[must_use]
    pub fn belongs_to(self, player: PlayerId) -> bool {
        self.owner() == Some(player)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Token::Empty)
    }

    #[must_use]
    pub const fn is_grandmaster(self) -> bool {
        matches!(self, Token::GrandmasterA | Token::GrandmasterB)
    }

    /// Character form of this token.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Token::Empty => ' ',
            Token::MonkA => 'x',
            Token::GrandmasterA => 'X',
            Token::MonkB => 'y',
            Token::GrandmasterB => 'Y',
        }
    }
}

impl TryFrom<char> for Token {
    type Error = OnitamaError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            ' ' => Ok(Token::Empty),
            'x' => Ok(Token::MonkA),
            'X' => Ok(Token::GrandmasterA),
            'y' => Ok(Token::MonkB),
            'Y' => Ok(Token::GrandmasterB),
            other => Err(OnitamaError::InvalidToken(other)),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Build a grid from row strings in character form.
///
/// Rows are not required to be square here; `Board::with_grid` checks shape.
///
/// ```
/// use rust_onitama::core::{parse_grid, Token};
///
/// let grid = parse_grid(&["xxXxx", "     ", "     ", "     ", "yyYyy"]).unwrap();
/// assert_eq!(grid[0][2], Token::GrandmasterA);
/// assert_eq!(grid[4][0], Token::MonkB);
/// ```
pub fn parse_grid(rows: &[&str]) -> Result<Grid> {
    rows.iter()
        .map(|row| row.chars().map(Token::try_from).collect())
        .collect()
}
