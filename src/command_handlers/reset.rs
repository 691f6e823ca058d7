use crate::command_handlers::Context;
use crate::config::Config;
use anyhow::Result;

pub fn reset_config(ctx: &Context) -> Result<()> {
    Config::reset(&ctx.config_path)?;
    println!("Flow manager config reset to defaults.");
    Ok(())
}
