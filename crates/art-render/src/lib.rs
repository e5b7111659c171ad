//! # art-render
//!
//! Turns the ordered catalog and the reservation set into a gallery view and
//! writes it to a display surface.
//!
//! - [`view`]: pure view model (headings + cards) built from the two inputs
//! - [`surface`]: the [`DisplaySurface`] seam (status line + gallery container)
//! - [`html`]: a static HTML page surface
//! - [`pipeline`]: concurrent load of both inputs, then a single render

pub mod html;
pub mod labels;
pub mod pipeline;
pub mod surface;
pub mod view;

pub use html::HtmlPage;
pub use labels::Labels;
pub use pipeline::{LoadError, LoadSummary, load_and_render};
pub use surface::{DisplaySurface, MemorySurface};
pub use view::{ArtCard, CardAction, GalleryNode, RenderContext, ReservationStatus, build_view, render};
