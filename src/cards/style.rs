//! Style cards - named sets of move offsets with an owner.
//!
//! A card's offsets are fixed when it is created. Only the owner changes
//! during play, when the card is exchanged with the spare.
//!
//! Offsets are written from player B's facing: `(-1, 0)` is one step toward
//! row 0. Player A's moves are mirrored by the engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::{OnitamaError, Result};
use crate::core::player::PlayerId;

/// A relative move `(row_delta, col_delta)`.
pub type Offset = (i32, i32);

/// Inline storage for a card's offsets; no card has more than four.
pub type Offsets = SmallVec<[Offset; 4]>;

/// The five styles in play, in standard order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleName {
    Crab,
    Horse,
    Mantis,
    Rooster,
    Dragon,
}

impl StyleName {
    /// All styles, in standard order.
    pub const ALL: [StyleName; 5] = [
        StyleName::Crab,
        StyleName::Horse,
        StyleName::Mantis,
        StyleName::Rooster,
        StyleName::Dragon,
    ];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StyleName::Crab => "crab",
            StyleName::Horse => "horse",
            StyleName::Mantis => "mantis",
            StyleName::Rooster => "rooster",
            StyleName::Dragon => "dragon",
        }
    }
}

impl std::fmt::Display for StyleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StyleName {
    type Err = OnitamaError;

    fn from_str(s: &str) -> Result<Self> {
        StyleName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OnitamaError::UnknownStyle(s.to_string()))
    }
}

/// A style card.
///
/// Two cards are equal when their name and owner match; offsets follow from
/// the name. `Clone` gives a fully independent card.
///
/// ## Example
///
/// ```
/// use rust_onitama::cards::{StyleCard, StyleName};
/// use rust_onitama::core::PlayerId;
///
/// let crab = StyleCard::new(StyleName::Crab, &[(-1, 0), (0, -2), (0, 2)], Some(PlayerId::A));
///
/// let mut moves = crab.moves();
/// moves.push((5, 5));
/// assert_eq!(crab.moves().len(), 3);
/// assert!(crab.allows((0, 2)));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StyleCard {
    /// Which style this is.
    pub name: StyleName,

    offsets: Offsets,

    /// Current owner. `None` means the card is the spare.
    pub owner: Option<PlayerId>,
}

impl StyleCard {
    /// Create a card, copying `offsets`.
    #[must_use]
    pub fn new(name: StyleName, offsets: &[Offset], owner: Option<PlayerId>) -> Self {
        Self {
            name,
            offsets: SmallVec::from_slice(offsets),
            owner,
        }
    }

    /// A copy of this card's offsets.
    #[must_use]
    pub fn moves(&self) -> Vec<Offset> {
        self.offsets.to_vec()
    }

    /// Read-only view of the offsets.
    #[must_use]
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Whether `offset` is one of this card's moves.
    #[must_use]
    pub fn allows(&self, offset: Offset) -> bool {
        self.offsets.contains(&offset)
    }

    /// Whether this card is the spare.
    #[must_use]
    pub fn is_spare(&self) -> bool {
        self.owner.is_none()
    }

    /// Whether `player` owns this card.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }
}

impl PartialEq for StyleCard {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.owner == other.owner
    }
}

impl Eq for StyleCard {}
