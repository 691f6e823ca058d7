use crate::command_handlers::Context;
use crate::config::Config;
use crate::platform::{absolutize, expand_home};
use crate::profile::TerminalProfile;
use anyhow::{Context as _, Result};
use fs_err as fs;

pub fn initialize(ctx: &Context) -> Result<()> {
    let mut cfg = ctx.load_config()?;
    if cfg.initialized {
        println!("Flow manager is already initialized.");
        return Ok(());
    }
    configure(ctx, &mut cfg)?;
    println!("Flow manager initialized successfully!");
    Ok(())
}

/// Ask for profile and storage location, then persist an initialized config.
pub(crate) fn configure(ctx: &Context, cfg: &mut Config) -> Result<()> {
    let choices: Vec<&str> = TerminalProfile::ALL.iter().map(|p| p.as_str()).collect();
    let current = cfg
        .profile()
        .ok()
        .and_then(|p| TerminalProfile::ALL.iter().position(|q| *q == p))
        .unwrap_or(0);
    let idx = ctx
        .prompter
        .select("Select your terminal profile:", &choices, current)?;

    let suggested = expand_home(&cfg.flow_dir.to_string_lossy())
        .display()
        .to_string();
    let location = ctx.prompter.input(
        "Enter the path where flows will be stored:",
        Some(suggested.as_str()),
        &|v: &str| {
            if v.trim().is_empty() {
                Err("Please enter a path".to_string())
            } else {
                Ok(())
            }
        },
    )?;

    cfg.terminal_profile = TerminalProfile::ALL[idx].to_string();
    cfg.set_flow_dir(absolutize(&ctx.cwd, &expand_home(&location)));
    cfg.initialized = true;
    fs::create_dir_all(&cfg.flow_command_dir)
        .with_context(|| format!("creating flow storage at {}", cfg.flow_dir.display()))?;
    cfg.save(&ctx.config_path)?;
    Ok(())
}
