//! Page pipeline: load catalog and reservations concurrently, then render once.
//!
//! Both loads are joined with fail-fast semantics: the first error wins and
//! the other load is dropped. On failure only the error status is written;
//! the gallery container is never touched, so no partial view is shown.

use std::error::Error as StdError;

use art_core::{CatalogSource, ReservationSource};
use thiserror::Error;

use crate::surface::DisplaySurface;
use crate::view::{RenderContext, render};

type BoxError = Box<dyn StdError + Send + Sync>;

/// Which load failed, with the loader's own error as source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load image catalog: {0}")]
    Catalog(#[source] BoxError),

    #[error("failed to load reservations: {0}")]
    Reservations(#[source] BoxError),
}

/// Counts shown in the status line after a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct LoadSummary {
    pub images: usize,
    pub reservations: usize,
}

/// Load both inputs concurrently and render them onto `surface`.
///
/// Status line sequence: loading text, then either the summary (followed by
/// a full gallery replace) or the fixed error text.
///
/// # Errors
///
/// Returns [`LoadError`] if either source fails. The error has already been
/// logged and reflected in the status line when this returns.
pub async fn load_and_render<C, R, S>(
    catalog: &C,
    reservations: &R,
    ctx: &RenderContext,
    surface: &mut S,
) -> Result<LoadSummary, LoadError>
where
    C: CatalogSource + Sync,
    R: ReservationSource + Sync,
    S: DisplaySurface + ?Sized,
{
    surface.set_status(&ctx.labels.loading);

    let loaded = tokio::try_join!(
        async {
            catalog
                .list_images()
                .await
                .map_err(|e| LoadError::Catalog(Box::new(e)))
        },
        async {
            reservations
                .list_reserved_keys()
                .await
                .map_err(|e| LoadError::Reservations(Box::new(e)))
        },
    );

    match loaded {
        Ok((entries, reserved)) => {
            let summary = LoadSummary {
                images: entries.len(),
                reservations: reserved.len(),
            };
            surface.set_status(&ctx.labels.summary_line(summary.images, summary.reservations));
            render(&entries, &reserved, ctx, surface);
            tracing::info!(
                images = summary.images,
                reservations = summary.reservations,
                "gallery rendered"
            );
            Ok(summary)
        }
        Err(error) => {
            tracing::error!(%error, "gallery load failed");
            surface.set_status(&ctx.labels.error);
            Err(error)
        }
    }
}
