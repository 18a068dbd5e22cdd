//! The standard style set and its opening distribution.
//!
//! Player A opens with crab and horse, player B with mantis and rooster, and
//! dragon starts as the spare. Cards are dealt in `StyleName::ALL` order.

use super::style::{Offset, StyleCard, StyleName};
use crate::core::player::PlayerId;

/// Static data for one style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleDefinition {
    pub name: StyleName,
    pub offsets: &'static [Offset],
    /// Owner at the start of a game. `None` is the spare.
    pub initial_owner: Option<PlayerId>,
}

impl StyleDefinition {
    /// A fresh card for this style with its opening owner.
    #[must_use]
    pub fn card(&self) -> StyleCard {
        StyleCard::new(self.name, self.offsets, self.initial_owner)
    }
}

/// Definitions for every style, in `StyleName::ALL` order.
pub const STANDARD_STYLES: [StyleDefinition; 5] = [
    StyleDefinition {
        name: StyleName::Crab,
        offsets: &[(-1, 0), (0, -2), (0, 2)],
        initial_owner: Some(PlayerId::A),
    },
    StyleDefinition {
        name: StyleName::Horse,
        offsets: &[(-1, 0), (1, 0), (0, -1)],
        initial_owner: Some(PlayerId::A),
    },
    StyleDefinition {
        name: StyleName::Mantis,
        offsets: &[(1, 0), (-1, -1), (-1, 1)],
        initial_owner: Some(PlayerId::B),
    },
    StyleDefinition {
        name: StyleName::Rooster,
        offsets: &[(0, 1), (0, -1), (-1, 1), (1, -1)],
        initial_owner: Some(PlayerId::B),
    },
    StyleDefinition {
        name: StyleName::Dragon,
        offsets: &[(1, -1), (1, 1), (-1, 2), (-1, -2)],
        initial_owner: None,
    },
];

/// Look up the definition of a style.
#[must_use]
pub fn definition(name: StyleName) -> &'static StyleDefinition {
    &STANDARD_STYLES[name as usize]
}

/// The five cards with their opening owners.
///
/// ```
/// use rust_onitama::cards::{standard_deal, StyleName};
/// use rust_onitama::core::PlayerId;
///
/// let cards = standard_deal();
/// assert_eq!(cards[0].name, StyleName::Crab);
/// assert_eq!(cards[1].owner, Some(PlayerId::A));
/// assert!(cards[4].is_spare());
/// assert_eq!(cards[3].moves(), vec![(0, 1), (0, -1), (-1, 1), (1, -1)]);
/// ```
#[must_use]
pub fn standard_deal() -> Vec<StyleCard> {
    STANDARD_STYLES.iter().map(StyleDefinition::card).collect()
}
