//! Build script: embeds the release version and checks the theme bundle.
//!
//! `HEXXA_VERSION` is taken from the environment when set (release builds)
//! and from `git describe` otherwise. A checkout without
//! `Resources/Themes` still builds, but the binary would have nothing to
//! install, so the build warns about it.
#![allow(clippy::print_stdout)]

use std::path::Path;
use std::process::Command;

const THEMES_DIR: &str = "Resources/Themes";

fn describe_checkout() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!version.is_empty()).then_some(version)
}

fn main() {
    let version = std::env::var("HEXXA_VERSION")
        .ok()
        .or_else(describe_checkout);
    if let Some(version) = version {
        println!("cargo:rustc-env=HEXXA_VERSION={version}");
    }

    let themes = Path::new(THEMES_DIR);
    let bundled = std::fs::read_dir(themes).map_or(0, |entries| {
        entries
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|x| x == "xccolortheme"))
            .count()
    });
    if bundled == 0 {
        println!(
            "cargo:warning=no .xccolortheme files in {THEMES_DIR}; nothing would be installed"
        );
    }

    println!("cargo:rerun-if-changed={THEMES_DIR}");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=HEXXA_VERSION");
}
