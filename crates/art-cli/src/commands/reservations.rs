use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `artm reservations`. Names are printed sorted for stable output.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reserved = ctx.client.fetch_reservations().await?;
    output(&reserved.sorted(), flags.format)
}
