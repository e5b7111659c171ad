use std::path::{Path, PathBuf};

use anyhow::Context;
use art_render::{DisplaySurface, GalleryNode, HtmlPage, LoadError, LoadSummary, load_and_render};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BuildArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct BuildResponse {
    path: PathBuf,
    #[serde(flatten)]
    summary: LoadSummary,
}

/// Mirrors every status line onto the terminal spinner while the page
/// collects the content.
struct TerminalPage<'a> {
    page: &'a mut HtmlPage,
    progress: &'a Progress,
}

impl DisplaySurface for TerminalPage<'_> {
    fn set_status(&mut self, text: &str) {
        self.progress.set_message(text);
        self.page.set_status(text);
    }

    fn replace_gallery(&mut self, nodes: Vec<GalleryNode>) {
        self.page.replace_gallery(nodes);
    }
}

fn write_page(path: &Path, page: &HtmlPage) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, page.to_html())
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Close the spinner with the page's final status, then report the first
/// failure. A failed write wins over a failed load.
fn settle(
    progress: &Progress,
    status: &str,
    loaded: Result<LoadSummary, LoadError>,
    written: anyhow::Result<()>,
    out: &Path,
) -> anyhow::Result<LoadSummary> {
    match (loaded, written) {
        (Ok(summary), Ok(())) => {
            progress.finish_ok(status);
            Ok(summary)
        }
        (_, Err(error)) => {
            progress.finish_err(status);
            Err(error)
        }
        (Err(error), Ok(())) => {
            progress.finish_err(status);
            Err(error).with_context(|| {
                format!("gallery load failed; wrote error page to {}", out.display())
            })
        }
    }
}

/// Handle `artm build`.
///
/// The page is written even when a load fails, showing only the error
/// status; the command then exits non-zero.
pub async fn handle(args: &BuildArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let labels = &ctx.render.labels;
    let mut page = HtmlPage::new(labels.page_title.as_str(), ctx.config.display.locale.as_str())
        .with_generated_at(chrono::Utc::now());
    let progress = Progress::spinner(&labels.loading);

    let loaded = {
        let mut surface = TerminalPage {
            page: &mut page,
            progress: &progress,
        };
        load_and_render(&ctx.client, &ctx.client, &ctx.render, &mut surface).await
    };

    let written = write_page(&args.out, &page);
    let summary = settle(&progress, page.status(), loaded, written, &args.out)?;

    tracing::info!(path = %args.out.display(), "gallery page written");

    if args.open {
        open::that(&args.out)
            .with_context(|| format!("failed to open {}", args.out.display()))?;
    }

    output(
        &BuildResponse {
            path: args.out.clone(),
            summary,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use art_render::Labels;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn write_page_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist").join("index.html");
        let mut page = HtmlPage::new("Малюнки", "uk");
        page.set_status(&Labels::default().error);

        write_page(&path, &page).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Помилка завантаження."));
        assert!(html.contains("<main id=\"gallery\">\n</main>"));
    }

    #[test]
    fn failed_write_still_finishes_spinner() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("dist");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("index.html");
        let progress = Progress::hidden();

        let written = write_page(&path, &HtmlPage::new("Gallery", "en"));
        assert!(written.is_err());

        let loaded = Ok(LoadSummary {
            images: 2,
            reservations: 1,
        });
        let result = settle(&progress, "done", loaded, written, &path);

        assert!(result.is_err());
        assert!(progress.is_finished());
    }

    #[test]
    fn failed_load_finishes_spinner_and_names_the_page() {
        let progress = Progress::hidden();
        let loaded = Err(LoadError::Reservations(Box::new(std::io::Error::other("offline"))));

        let error = settle(&progress, "error", loaded, Ok(()), Path::new("dist/index.html"))
            .unwrap_err();

        assert!(progress.is_finished());
        assert!(format!("{error:#}").contains("wrote error page to dist/index.html"));
        assert!(format!("{error:#}").contains("offline"));
    }

    #[test]
    fn response_flattens_summary() {
        let response = BuildResponse {
            path: PathBuf::from("dist/index.html"),
            summary: LoadSummary {
                images: 3,
                reservations: 1,
            },
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"path": "dist/index.html", "images": 3, "reservations": 1})
        );
    }

    #[test]
    fn terminal_page_forwards_to_page() {
        let progress = Progress::spinner("loading");
        let mut page = HtmlPage::new("Gallery", "en");
        {
            let mut surface = TerminalPage {
                page: &mut page,
                progress: &progress,
            };
            surface.set_status("done");
            surface.replace_gallery(vec![GalleryNode::Heading("Cats".to_string())]);
        }
        assert_eq!(page.status(), "done");
        assert_eq!(page.gallery().len(), 1);
    }
}
