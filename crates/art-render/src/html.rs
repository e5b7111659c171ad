//! Static HTML page surface.
//!
//! The page carries the two containers of the gallery: `#status` for the
//! status line and `#gallery` for headings and cards. Reserved cards get an
//! anchor without `href`, so activating it goes nowhere.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::surface::DisplaySurface;
use crate::view::{ArtCard, CardAction, GalleryNode};

const STYLESHEET: &str = r"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1200px; padding: 1rem; }
#status { color: #555; }
#gallery { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.category-title { grid-column: 1 / -1; margin: 1.5rem 0 0; }
.art-card { border: 1px solid #ddd; border-radius: 8px; padding: .5rem; display: flex; flex-direction: column; gap: .4rem; }
.art-card img { width: 100%; height: 200px; object-fit: cover; border-radius: 4px; }
.art-title { font-weight: 600; }
.badge { align-self: flex-start; border-radius: 999px; padding: .1rem .6rem; font-size: .85rem; }
.badge.free { background: #e3f6e5; color: #1b6b2a; }
.badge.reserved { background: #fde7e7; color: #a12020; }
.btn { display: inline-block; padding: .4rem .8rem; border-radius: 6px; text-decoration: none; }
.btn-primary { background: #2463eb; color: #fff; }
.btn-disabled { background: #ccc; color: #666; cursor: not-allowed; pointer-events: none; }
";

/// A full HTML document built from the gallery surface calls.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    title: String,
    lang: String,
    status: String,
    gallery: Vec<GalleryNode>,
    generated_at: Option<DateTime<Utc>>,
}

impl HtmlPage {
    #[must_use]
    pub fn new(title: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: lang.into(),
            status: String::new(),
            gallery: Vec::new(),
            generated_at: None,
        }
    }

    /// Stamp the page footer with the build time.
    #[must_use]
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn gallery(&self) -> &[GalleryNode] {
        &self.gallery
    }

    /// Serialize the page.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HtmlPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"{}\">", escape_html(&self.lang))?;
        f.write_str("<head>\n<meta charset=\"utf-8\">\n")?;
        f.write_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n")?;
        writeln!(f, "<title>{}</title>", escape_html(&self.title))?;
        writeln!(f, "<style>{STYLESHEET}</style>")?;
        f.write_str("</head>\n<body>\n")?;
        writeln!(f, "<h1>{}</h1>", escape_html(&self.title))?;
        writeln!(f, "<p id=\"status\">{}</p>", escape_html(&self.status))?;
        f.write_str("<main id=\"gallery\">\n")?;
        for node in &self.gallery {
            match node {
                GalleryNode::Heading(category) => writeln!(
                    f,
                    "<h2 class=\"category-title\">{}</h2>",
                    escape_html(category)
                )?,
                GalleryNode::Card(card) => write_card(f, card)?,
            }
        }
        f.write_str("</main>\n")?;
        if let Some(at) = self.generated_at {
            writeln!(
                f,
                "<footer><time datetime=\"{}\">{}</time></footer>",
                at.to_rfc3339(),
                at.format("%Y-%m-%d %H:%M UTC")
            )?;
        }
        f.write_str("</body>\n</html>\n")
    }
}

impl DisplaySurface for HtmlPage {
    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn replace_gallery(&mut self, nodes: Vec<GalleryNode>) {
        self.gallery = nodes;
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &ArtCard) -> fmt::Result {
    f.write_str("<div class=\"art-card\">\n")?;
    writeln!(
        f,
        "<img loading=\"lazy\" alt=\"{}\" src=\"{}\">",
        escape_html(&card.name),
        escape_html(&card.image_url)
    )?;
    writeln!(f, "<div class=\"art-title\">{}</div>", escape_html(&card.title))?;
    writeln!(
        f,
        "<div class=\"badge {}\">{}</div>",
        card.status.css_class(),
        escape_html(&card.status_label)
    )?;
    f.write_str("<div class=\"actions\">")?;
    match &card.action {
        CardAction::Reserve { href } => write!(
            f,
            "<a class=\"btn btn-primary\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            escape_html(href),
            escape_html(&card.action_label)
        )?,
        CardAction::Taken => write!(
            f,
            "<a class=\"btn btn-disabled\" role=\"link\" aria-disabled=\"true\">{}</a>",
            escape_html(&card.action_label)
        )?,
    }
    f.write_str("</div>\n</div>\n")
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
