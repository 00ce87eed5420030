//! Stamps the binary with the revision and build time reported by `/api/v1/status`.
use chrono::Utc;
use std::{env, process::Command};

fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let revision = String::from_utf8(output.stdout).ok()?;
    let revision = revision.trim();
    (!revision.is_empty()).then(|| revision.to_string())
}

fn main() {
    // Container builds have no .git directory and pass the revision in.
    let revision = env::var("WAREHOUSE_BUILD_REVISION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(git_revision)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={}", revision);
    println!("cargo:rustc-env=BUILD_TIME={}", Utc::now().to_rfc3339());
    println!("cargo:rerun-if-env-changed=WAREHOUSE_BUILD_REVISION");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
