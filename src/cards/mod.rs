//! Style cards and the standard style set.
//!
//! ## Key Types
//!
//! - `StyleName`: The five styles in play
//! - `StyleCard`: Offsets plus a mutable owner tag
//! - `StyleDefinition`: Static offsets and opening owner for a style
//!
//! ## The Spare
//!
//! A card with `owner: None` is the spare. Exactly one card is spare at any
//! time; using a card to move swaps it with the spare.

pub mod registry;
pub mod style;

pub use registry::{definition, standard_deal, StyleDefinition, STANDARD_STYLES};
pub use style::{Offset, Offsets, StyleCard, StyleName};
