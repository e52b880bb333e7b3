use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Journal { action } => commands::journal::handle(&action, ctx, flags),
        Commands::Analyze(args) => commands::analyze::handle(&args, flags),
        Commands::Tools { action } => commands::tools::handle(&action, ctx, flags),
        Commands::Support => commands::support::handle(flags),
        Commands::Privacy => commands::privacy::handle(ctx, flags),
    }
}
