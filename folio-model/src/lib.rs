//! Core data model definitions shared across Folio crates.
#![allow(missing_docs)]

pub mod fallback;
pub mod filter_types;
pub mod ids;
pub mod portfolio;

pub use fallback::fallback_items;
pub use filter_types::Facet;
pub use ids::PortfolioItemId;
pub use portfolio::{MediaKind, PortfolioItem};
