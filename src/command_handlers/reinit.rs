use crate::command_handlers::{init, profile_or_report, Context};
use crate::platform::{absolutize, expand_home};
use crate::process;
use crate::registry::FlowRegistry;
use anyhow::Result;
use tracing::warn;

const CHOICES: [&str; 3] = ["Move To New Location", "Delete Existing Flows", "Cancel"];

pub fn reinitialize(ctx: &Context) -> Result<()> {
    let mut cfg = ctx.load_config()?;
    let registry = FlowRegistry::load(&cfg.flow_dir)?;
    if registry.is_empty() {
        cfg.initialized = false;
        init::configure(ctx, &mut cfg)?;
        println!("Flow manager initialized successfully!");
        return Ok(());
    }

    let choice = ctx.prompter.select(
        "You are about to reinitialize the flow manager. What would you like to do with existing flows?",
        &CHOICES,
        0,
    )?;
    match choice {
        0 => {
            let Some(profile) = profile_or_report(&cfg) else {
                return Ok(());
            };
            let location = ctx.prompter.input(
                "Enter the new path where flows will be stored:",
                None,
                &|v: &str| {
                    let target = absolutize(&ctx.cwd, &expand_home(v));
                    if v.trim().is_empty() {
                        Err("Please enter a path".to_string())
                    } else if target.exists() {
                        Err("That location already exists; choose a new path".to_string())
                    } else {
                        Ok(())
                    }
                },
            )?;
            let old_dir = cfg.flow_dir.clone();
            let new_dir = absolutize(&ctx.cwd, &expand_home(&location));
            if !external_step(process::execute(profile.move_command(&old_dir, &new_dir)), "moving flows") {
                return Ok(());
            }
            println!("Flows moved successfully!\n\nNew location: {}", new_dir.display());

            FlowRegistry::load(&new_dir)?.relocate_scripts(&old_dir, &new_dir)?;
            cfg.set_flow_dir(new_dir);
            cfg.initialized = true;
            cfg.save(&ctx.config_path)?;
        }
        1 => {
            let Some(profile) = profile_or_report(&cfg) else {
                return Ok(());
            };
            if !external_step(process::execute(profile.remove_command(&cfg.flow_dir)), "deleting flows") {
                return Ok(());
            }
            cfg.initialized = false;
            cfg.save(&ctx.config_path)?;
            init::initialize(ctx)?;
        }
        _ => {}
    }
    Ok(())
}

/// Report a failed external command; true when it succeeded.
fn external_step(result: Result<std::process::ExitStatus>, what: &str) -> bool {
    match result {
        Ok(status) if status.success() => true,
        Ok(status) => {
            warn!(%status, "{what} failed");
            eprintln!("Error {what}: {status}");
            false
        }
        Err(e) => {
            warn!(error = %e, "{what} failed");
            eprintln!("Error {what}: {e:#}");
            false
        }
    }
}
