//! Step/Decoration registry.
//!
//! Turns the raw authored attribute records of a [`DeckManifest`] into the
//! immutable [`Deck`] of [`Step`]s and [`Decoration`]s that navigation
//! borrows from by identifier.

mod entity;
mod location;
mod registry;
/// Raw attribute records and manifest loading.
pub mod source;

pub use entity::{Decoration, Step};
pub use location::{parse_number, GridLocation, PIXELS_PER_UNIT};
pub use registry::Deck;
pub use source::{Attribute, DeckManifest, RawDecoration, RawStep};
