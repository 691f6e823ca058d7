use crate::command_handlers::{Context, FLOW_NOT_FOUND};
use crate::error::StoreError;
use crate::registry::FlowRegistry;
use anyhow::Result;

pub fn delete_flow(ctx: &Context, name: &str) -> Result<()> {
    let Some(cfg) = ctx.initialized_config()? else {
        return Ok(());
    };
    let mut registry = FlowRegistry::load(&cfg.flow_dir)?;
    match registry.remove(name) {
        Ok(Some(_)) => println!("Flow deleted successfully!"),
        Ok(None) => println!("{FLOW_NOT_FOUND}"),
        Err(e @ StoreError::RemoveScript { .. }) => eprintln!("Error deleting flow: {e}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
