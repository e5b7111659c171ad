use art_core::filename::UNNUMBERED;
use art_core::{ImageEntry, LinkBuilder, ReservationSet};
use art_render::ReservationStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CatalogRow {
    category: String,
    /// `None` for files without a numeric prefix.
    number: Option<u64>,
    name: String,
    status: &'static str,
    url: String,
}

fn rows(entries: Vec<ImageEntry>, reserved: &ReservationSet, links: &LinkBuilder) -> Vec<CatalogRow> {
    entries
        .into_iter()
        .map(|entry| {
            let status = if reserved.contains(&entry.name) {
                ReservationStatus::Reserved
            } else {
                ReservationStatus::Free
            };
            CatalogRow {
                url: links.image_url(&entry.path),
                number: (entry.number != UNNUMBERED).then_some(entry.number),
                status: status.css_class(),
                category: entry.category,
                name: entry.name,
            }
        })
        .collect()
}

/// Handle `artm catalog`. Both listings are fetched together and the first
/// failure aborts the command.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (entries, reserved) =
        tokio::try_join!(ctx.client.fetch_catalog(), ctx.client.fetch_reservations())?;
    output(&rows(entries, &reserved, &ctx.render.links), flags.format)
}
