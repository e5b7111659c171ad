use anyhow::bail;
use art_core::LinkBuilder;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::LinkArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, PartialEq, Eq, Serialize)]
struct LinkResponse {
    filename: String,
    title: String,
    url: String,
}

fn link_for(filename: &str, links: &LinkBuilder) -> anyhow::Result<LinkResponse> {
    let filename = filename.trim();
    if filename.is_empty() {
        bail!("filename must not be empty");
    }
    Ok(LinkResponse {
        filename: filename.to_string(),
        title: links.reservation_title(filename),
        url: links.reservation_request(filename),
    })
}

/// Handle `artm link <FILENAME>`. Raw output is the bare URL.
pub fn handle(args: &LinkArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = link_for(&args.filename, &ctx.render.links)?;
    if flags.format == OutputFormat::Raw {
        return output(&response.url, flags.format);
    }
    output(&response, flags.format)
}
