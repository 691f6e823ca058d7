use crate::cli::Commands;
use crate::command_handlers::{
    create, delete, edit, init, list, reinit, reset, run, show_config, update, Context,
};
use anyhow::Result;

pub fn dispatch(cmd: Commands, ctx: &Context) -> Result<()> {
    if cmd.checks_for_updates() {
        ctx.updates.check();
    }
    match cmd {
        Commands::Init => init::initialize(ctx),
        Commands::Create => create::create_flow(ctx),
        Commands::List => list::list_flows(ctx),
        Commands::Run { name } => run::run_flow(ctx, &name),
        Commands::Delete { name } => delete::delete_flow(ctx, &name),
        Commands::Reinit => reinit::reinitialize(ctx),
        Commands::Edit { name } => edit::edit_flow(ctx, &name),
        Commands::Default => reset::reset_config(ctx),
        Commands::Config => show_config::show_config(ctx),
        Commands::Update => update::update(ctx),
    }
}
