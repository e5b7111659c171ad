//! # art-core
//!
//! Core types for the art market gallery.
//!
//! This crate provides the values shared by the loaders and the renderer:
//! - The image filename convention (`<number>-<category>.<ext>`) and its parsers
//! - [`ImageEntry`] and locale-aware catalog ordering
//! - [`ReservationSet`] and issue-title extraction
//! - Deterministic URL builders for images and reservation requests
//! - The [`CatalogSource`] / [`ReservationSource`] seams the pipeline is generic over

pub mod catalog;
pub mod collation;
pub mod errors;
pub mod filename;
pub mod links;
pub mod reservation;
pub mod source;

pub use catalog::ImageEntry;
pub use collation::CategoryCollator;
pub use errors::CoreError;
pub use links::{ImageHost, LinkBuilder, ReservationForm};
pub use reservation::ReservationSet;
pub use source::{CatalogSource, ReservationSource};
