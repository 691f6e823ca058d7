use crate::command_handlers::{Context, FLOW_NOT_FOUND};
use crate::process;
use crate::registry::FlowRegistry;
use anyhow::Result;
use tracing::warn;

pub fn edit_flow(ctx: &Context, name: &str) -> Result<()> {
    let editor = process::editor_from_env(
        std::env::var("VISUAL").ok().as_deref(),
        std::env::var("EDITOR").ok().as_deref(),
    );
    edit_flow_with(ctx, name, &editor)
}

/// Open the flow's script with `editor`, from the flow's working directory.
pub fn edit_flow_with(ctx: &Context, name: &str, editor: &str) -> Result<()> {
    let Some(cfg) = ctx.initialized_config()? else {
        return Ok(());
    };
    let registry = FlowRegistry::load(&cfg.flow_dir)?;
    let Some(flow) = registry.find(name) else {
        println!("{FLOW_NOT_FOUND}");
        return Ok(());
    };

    println!("Opening flow for editing: {}", flow.name);
    match process::open_in_editor(editor, &flow.script, &flow.path) {
        Ok(status) if status.success() => {}
        Ok(status) => {
            warn!(flow = %flow.name, %status, "editor exited with failure");
            eprintln!("Error opening flow for editing: {status}");
        }
        Err(e) => {
            warn!(flow = %flow.name, error = %e, "editor could not be started");
            eprintln!("Error opening flow for editing: {e:#}");
        }
    }
    println!("Finished.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Flow;
    use crate::test_support::Sandbox;
    use fs_err as fs;

    fn seed(sb: &Sandbox, name: &str) -> Flow {
        let cfg = sb.config();
        let script = cfg.flow_command_dir.join(name).join("script.sh");
        fs::create_dir_all(script.parent().unwrap()).unwrap();
        fs::write(&script, "#!/bin/bash\n\necho hi\n").unwrap();
        let flow = Flow {
            name: name.into(),
            path: sb.project_dir("project"),
            script,
        };
        sb.registry().add(flow.clone()).unwrap();
        flow
    }

    #[test]
    fn unknown_flow_opens_nothing() {
        let sb = Sandbox::initialized("bash");
        let flow = seed(&sb, "build");
        let before = fs::read_to_string(sb.flows_file()).unwrap();

        edit_flow_with(&sb.ctx(), "ghost", "definitely-not-an-editor").unwrap();
        assert_eq!(fs::read_to_string(sb.flows_file()).unwrap(), before);
        assert_eq!(fs::read_to_string(&flow.script).unwrap(), "#!/bin/bash\n\necho hi\n");
    }

    #[test]
    fn missing_editor_is_reported_not_fatal() {
        let sb = Sandbox::initialized("bash");
        seed(&sb, "build");
        edit_flow_with(&sb.ctx(), "build", "definitely-not-an-editor").unwrap();
        assert!(sb.registry().find("build").is_some());
    }

    #[cfg(unix)]
    #[test]
    fn editor_receives_script_and_runs_in_flow_dir() {
        use crate::platform::platform;

        let sb = Sandbox::initialized("bash");
        let flow = seed(&sb, "build");
        let stub = sb.path().join("stub-editor");
        fs::write(&stub, "#!/bin/sh\npwd > \"$1.cwd\"\n").unwrap();
        platform().make_executable(&stub).unwrap();

        edit_flow_with(&sb.ctx(), "build", stub.to_str().unwrap()).unwrap();
        let recorded = fs::read_to_string(flow.script.with_extension("sh.cwd")).unwrap();
        assert_eq!(
            fs::canonicalize(recorded.trim()).unwrap(),
            fs::canonicalize(&flow.path).unwrap()
        );
    }
}
