use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Build(args) => commands::build::handle(&args, ctx, flags).await,
        Commands::Catalog => commands::catalog::handle(ctx, flags).await,
        Commands::Reservations => commands::reservations::handle(ctx, flags).await,
        Commands::Link(args) => commands::link::handle(&args, ctx, flags),
    }
}
