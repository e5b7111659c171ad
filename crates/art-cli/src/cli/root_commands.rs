use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load catalog and reservations, then write the gallery page.
    Build(BuildArgs),
    /// Print the ordered image catalog.
    Catalog,
    /// Print the reserved filenames.
    Reservations,
    /// Print the reservation-request URL for one image.
    Link(LinkArgs),
}

#[derive(Clone, Debug, Args)]
pub struct BuildArgs {
    /// Where to write the HTML page.
    #[arg(short, long, default_value = "dist/index.html")]
    pub out: PathBuf,

    /// Open the page in the default browser afterwards.
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Debug, Args)]
pub struct LinkArgs {
    /// Image filename, e.g. `57-Nadir.jpg`.
    pub filename: String,
}
