use crate::command_handlers::{profile_or_report, Context};
use crate::platform::{absolutize, expand_home};
use crate::registry::{is_valid_flow_name, Flow, FlowRegistry};
use crate::script::{self, COMMAND_SEPARATOR};
use anyhow::Result;
use std::path::Path;
use tracing::warn;

pub fn create_flow(ctx: &Context) -> Result<()> {
    let Some(cfg) = ctx.initialized_config()? else {
        return Ok(());
    };
    let Some(profile) = profile_or_report(&cfg) else {
        return Ok(());
    };
    let mut registry = FlowRegistry::load(&cfg.flow_dir)?;

    let name = ctx.prompter.input("Enter flow name:", None, &|v: &str| {
        validate_name(&registry, v)
    })?;

    let suggested = ctx.cwd.join(&cfg.default_flow_path).display().to_string();
    let path_input = ctx.prompter.input(
        "Enter the path where the flow will be called from:",
        Some(suggested.as_str()),
        &|v: &str| validate_dir(&ctx.cwd, v),
    )?;
    let commands = ctx.prompter.input(
        "Enter the commands to run (comma separated):",
        None,
        &validate_commands,
    )?;

    let script = match script::write_script(&cfg.flow_command_dir, &name, profile, &commands) {
        Ok(path) => path,
        Err(e) => {
            warn!(flow = %name, error = %e, "script generation failed");
            eprintln!("Error creating flow: {e:#}");
            return Ok(());
        }
    };
    registry.add(Flow {
        name,
        path: absolutize(&ctx.cwd, &expand_home(&path_input)),
        script: script.clone(),
    })?;
    println!("Flow created successfully! File location: {}", script.display());
    Ok(())
}

fn validate_name(registry: &FlowRegistry, value: &str) -> Result<(), String> {
    if !is_valid_flow_name(value) {
        return Err("Please enter a valid flow name".to_string());
    }
    if registry.find(value).is_some() {
        return Err("Flow name already exists".to_string());
    }
    Ok(())
}

fn validate_dir(cwd: &Path, value: &str) -> Result<(), String> {
    let path = absolutize(cwd, &expand_home(value));
    if !path.exists() {
        return Err("Please enter a valid path".to_string());
    }
    if !path.is_dir() {
        return Err("Please enter a valid directory path".to_string());
    }
    Ok(())
}

fn validate_commands(value: &str) -> Result<(), String> {
    if value.split(COMMAND_SEPARATOR).all(|c| c.trim().is_empty()) {
        return Err("Please enter at least one command".to_string());
    }
    Ok(())
}
