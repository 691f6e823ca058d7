use crate::command_handlers::{profile_or_report, Context};
use crate::config::Config;
use crate::process;
use crate::profile::TerminalProfile;
use crate::registry::FlowRegistry;
use crate::script;
use crate::versioning::PKG_NAME;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::warn;

const RELEASES_URL: &str = "https://github.com/ScriptFlow/scriptflow-cli/releases";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub migrated: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub fn update(ctx: &Context) -> Result<()> {
    let Some(cfg) = ctx.initialized_config()? else {
        return Ok(());
    };
    let Some(profile) = profile_or_report(&cfg) else {
        return Ok(());
    };
    upgrade_package();

    let report = migrate_flows(&cfg, profile)?;
    println!(
        "Flow scripts: {} migrated, {} already current, {} failed",
        report.migrated, report.skipped, report.failed
    );
    println!("Flow manager updated successfully!");
    println!(
        "Please check for any breaking changes in the latest version and update your flows accordingly:\n{RELEASES_URL}"
    );
    Ok(())
}

fn upgrade_package() {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Installing latest {PKG_NAME}"));
    pb.enable_steady_tick(Duration::from_millis(120));

    let output = process::upgrade_command().and_then(|mut cmd| Ok(cmd.output()?));
    match output {
        Ok(out) if out.status.success() => {
            pb.finish_with_message(format!("{PKG_NAME} is up to date"));
        }
        Ok(out) => {
            pb.finish_with_message(format!("{PKG_NAME} upgrade FAILED ({})", out.status));
            let stderr = String::from_utf8_lossy(&out.stderr);
            warn!(status = %out.status, "package upgrade failed");
            if !stderr.trim().is_empty() {
                eprintln!("{}", stderr.trim_end());
            }
        }
        Err(e) => {
            pb.finish_with_message(format!("{PKG_NAME} upgrade FAILED"));
            warn!(error = %e, "package upgrade could not be started");
            eprintln!("Error updating flow manager: {e:#}");
        }
    }
}

/// Rewrite every legacy flow script into the guarded format. A script whose
/// extension no longer matches `profile` is replaced and its record re-pointed.
pub fn migrate_flows(cfg: &Config, profile: TerminalProfile) -> Result<MigrationReport> {
    let mut registry = FlowRegistry::load(&cfg.flow_dir)?;
    let mut report = MigrationReport::default();
    let mut moved = Vec::new();
    for flow in registry.list() {
        match script::migrate_script(&flow.script, profile) {
            Ok(Some(path)) => {
                report.migrated += 1;
                if path != flow.script {
                    moved.push((flow.name.clone(), path));
                }
            }
            Ok(None) => report.skipped += 1,
            Err(e) => {
                warn!(flow = %flow.name, error = %e, "script migration failed");
                eprintln!("Could not migrate flow {}: {e:#}", flow.name);
                report.failed += 1;
            }
        }
    }
    for (name, path) in moved {
        registry.set_script(&name, path)?;
    }
    Ok(report)
}
