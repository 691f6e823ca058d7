use crate::command_handlers::Context;
use crate::registry::{Flow, FlowRegistry};
use anyhow::Result;

pub fn list_flows(ctx: &Context) -> Result<()> {
    let Some(cfg) = ctx.initialized_config()? else {
        return Ok(());
    };
    let registry = FlowRegistry::load(&cfg.flow_dir)?;
    println!("{}", render(registry.list()));
    Ok(())
}

fn render(flows: &[Flow]) -> String {
    if flows.is_empty() {
        return "No flows found.".to_string();
    }
    let mut out = String::from("List of flows:");
    for flow in flows {
        out.push('\n');
        out.push_str(&flow.name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn flow(name: &str) -> Flow {
        Flow {
            name: name.into(),
            path: PathBuf::from("/tmp"),
            script: PathBuf::from(format!("/tmp/{name}.sh")),
        }
    }

    #[test]
    fn renders_names_in_registry_order() {
        assert_eq!(render(&[flow("zeta"), flow("alpha")]), "List of flows:\nzeta\nalpha");
    }

    #[test]
    fn empty_registry_says_so() {
        assert_eq!(render(&[]), "No flows found.");
    }
}
