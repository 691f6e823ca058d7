use crate::command_handlers::Context;
use anyhow::Result;

pub fn show_config(ctx: &Context) -> Result<()> {
    let cfg = ctx.load_config()?;
    println!("Config file: {}", ctx.config_path.display());
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}
