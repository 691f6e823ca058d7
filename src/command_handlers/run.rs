use crate::command_handlers::{profile_or_report, Context, FLOW_NOT_FOUND};
use crate::process;
use crate::registry::FlowRegistry;
use anyhow::Result;
use tracing::warn;

pub fn run_flow(ctx: &Context, name: &str) -> Result<()> {
    let Some(cfg) = ctx.initialized_config()? else {
        return Ok(());
    };
    let registry = FlowRegistry::load(&cfg.flow_dir)?;
    let Some(flow) = registry.find(name) else {
        println!("{FLOW_NOT_FOUND}");
        return Ok(());
    };
    let Some(profile) = profile_or_report(&cfg) else {
        return Ok(());
    };

    println!("Running flow: {}", flow.name);
    match process::run_flow(flow, profile) {
        Ok(status) if status.success() => {}
        Ok(status) => {
            warn!(flow = %flow.name, %status, "flow exited with failure");
            eprintln!("Error running flow: {status}");
        }
        Err(e) => {
            warn!(flow = %flow.name, error = %e, "flow could not be started");
            eprintln!("Error running flow: {e:#}");
        }
    }
    println!("Finished.");
    Ok(())
}
