//! Gallery view model.
//!
//! [`build_view`] walks the catalog in the order given and opens a new heading
//! each time the category changes. It does not sort: an unsorted catalog
//! produces repeated or fragmented headings.

use art_config::GalleryConfig;
use art_core::{ImageEntry, LinkBuilder, ReservationSet};

use crate::labels::Labels;
use crate::surface::DisplaySurface;

/// Everything the renderer needs besides the two data inputs.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub links: LinkBuilder,
    pub labels: Labels,
}

impl RenderContext {
    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            links: config.link_builder(),
            labels: Labels::from_config(&config.display),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Reserved,
    Free,
}

impl ReservationStatus {
    /// Styling class of the status badge.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Reserved => "reserved",
            Self::Free => "free",
        }
    }
}

/// What activating a card's button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Open the pre-filled reservation form in a new browsing context.
    Reserve { href: String },
    /// Already reserved: inert, no navigation.
    Taken,
}

impl CardAction {
    /// Target URL, if activating the control navigates anywhere.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Reserve { href } => Some(href),
            Self::Taken => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtCard {
    /// Filename; also the image alt text.
    pub name: String,
    pub image_url: String,
    pub title: String,
    pub status: ReservationStatus,
    pub status_label: String,
    pub action: CardAction,
    pub action_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryNode {
    Heading(String),
    Card(ArtCard),
}

fn card(entry: &ImageEntry, reserved: bool, ctx: &RenderContext) -> ArtCard {
    let (status, status_label, action, action_label) = if reserved {
        (
            ReservationStatus::Reserved,
            &ctx.labels.reserved,
            CardAction::Taken,
            &ctx.labels.reserved_action,
        )
    } else {
        (
            ReservationStatus::Free,
            &ctx.labels.free,
            CardAction::Reserve {
                href: ctx.links.reservation_request(&entry.name),
            },
            &ctx.labels.reserve_action,
        )
    };

    ArtCard {
        name: entry.name.clone(),
        image_url: ctx.links.image_url(&entry.path),
        title: entry.title().to_string(),
        status,
        status_label: status_label.clone(),
        action,
        action_label: action_label.clone(),
    }
}

/// Build headings and cards for a catalog already in catalog order.
#[must_use]
pub fn build_view(
    catalog: &[ImageEntry],
    reserved: &ReservationSet,
    ctx: &RenderContext,
) -> Vec<GalleryNode> {
    let mut nodes = Vec::with_capacity(catalog.len());
    let mut current: Option<&str> = None;
    for entry in catalog {
        if current != Some(entry.category.as_str()) {
            current = Some(entry.category.as_str());
            nodes.push(GalleryNode::Heading(entry.category.clone()));
        }
        nodes.push(GalleryNode::Card(card(entry, reserved.contains(&entry.name), ctx)));
    }
    nodes
}

/// Build the view and replace the surface's gallery with it.
pub fn render<S: DisplaySurface + ?Sized>(
    catalog: &[ImageEntry],
    reserved: &ReservationSet,
    ctx: &RenderContext,
    surface: &mut S,
) {
    surface.replace_gallery(build_view(catalog, reserved, ctx));
}
