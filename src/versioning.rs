use anyhow::{anyhow, Result};
use semver::Version;
use tracing::debug;

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Set to disable the release check.
pub const NO_UPDATE_CHECK_ENV: &str = "SCRIPTFLOW_NO_UPDATE_CHECK";

/// Announces a newer published release. Failures never interrupt a command.
pub trait UpdateCheck {
    fn check(&self);
}

pub struct NoUpdateCheck;

impl UpdateCheck for NoUpdateCheck {
    fn check(&self) {}
}

pub struct CratesIoCheck;

impl UpdateCheck for CratesIoCheck {
    fn check(&self) {
        match fetch_latest(PKG_NAME) {
            Ok(latest) => {
                if is_newer(&latest, PKG_VERSION) {
                    println!("{}", update_notice());
                }
            }
            Err(e) => debug!(error = %e, "update check failed"),
        }
    }
}

pub fn update_notice() -> String {
    format!("A new version of {PKG_NAME} is available. Run \"cargo install {PKG_NAME}\" to update.")
}

pub fn fetch_latest(name: &str) -> Result<String> {
    let url = format!("https://crates.io/api/v1/crates/{name}");
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(3))
        .build()?;
    let resp = client
        .get(url)
        .header("User-Agent", format!("{PKG_NAME}/{PKG_VERSION}"))
        .send()?;
    if !resp.status().is_success() {
        return Err(anyhow!("crates.io lookup failed {}", resp.status()));
    }
    let body: serde_json::Value = resp.json()?;
    latest_from_response(&body).ok_or_else(|| anyhow!("no published version found for {name}"))
}

fn latest_from_response(body: &serde_json::Value) -> Option<String> {
    let krate = body.get("crate")?;
    krate
        .get("max_stable_version")
        .and_then(|v| v.as_str())
        .or_else(|| krate.get("max_version").and_then(|v| v.as_str()))
        .map(|s| s.to_string())
}

/// True when `latest` parses as a strictly higher semver than `current`.
pub fn is_newer(latest: &str, current: &str) -> bool {
    match (
        Version::parse(latest.trim().trim_start_matches('v')),
        Version::parse(current.trim()),
    ) {
        (Ok(l), Ok(c)) => l > c,
        _ => false,
    }
}
