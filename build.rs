use std::process::Command;

/// Exposes the latest git tag as `GIT_TAG` so the footer and User-Agent can
/// report the release rather than the manifest version.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");

    let tag = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty());

    if let Some(tag) = tag {
        println!("cargo:rustc-env=GIT_TAG={tag}");
    }
}
