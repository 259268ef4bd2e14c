//! Build script: embeds version metadata into the binary.

use std::process::Command;

fn main() {
    // Release builds export DOTEM_VERSION; local builds fall back to git describe.
    if let Ok(version) = std::env::var("DOTEM_VERSION") {
        println!("cargo:rustc-env=DOTEM_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !version.is_empty() {
            println!("cargo:rustc-env=DOTEM_VERSION={version}");
        }
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=DOTEM_VERSION");
}
