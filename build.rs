//! Stamps the wasm bundle with a version and a short git revision so
//! `version()` can report which build a page is running.
//!
//! `UIKIT_VERSION` overrides the package version. `UIKIT_GIT_SHA` overrides
//! the revision; CI's `GITHUB_SHA` is used next, then `git rev-parse`.

use std::env;
use std::process::Command;

const SHORT_SHA_LEN: usize = 7;

fn main() {
    let version = env::var("UIKIT_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "unknown".into());

    let revision = env::var("UIKIT_GIT_SHA")
        .ok()
        .or_else(|| env::var("GITHUB_SHA").ok().map(|sha| shorten(&sha)))
        .or_else(local_revision)
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=UIKIT_VERSION={}", version);
    println!("cargo:rustc-env=UIKIT_GIT_SHA={}", revision);

    for var in ["UIKIT_VERSION", "UIKIT_GIT_SHA", "GITHUB_SHA"] {
        println!("cargo:rerun-if-env-changed={}", var);
    }
}

fn shorten(sha: &str) -> String {
    sha.chars().take(SHORT_SHA_LEN).collect()
}

/// `None` outside a git checkout (e.g. building from a source tarball).
fn local_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8(output.stdout).ok()?;
    let sha = sha.trim();
    (!sha.is_empty()).then(|| sha.to_string())
}
