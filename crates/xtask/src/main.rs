use anyhow::Context;
use serde::Deserialize;

/// Crates that must stay free of runtime, network and I/O dependencies.
const PURE_CRATES: &[&str] = &["guildroster-domain", "guildroster-shared"];

/// Dependencies only the player crate may pull in.
const FORBIDDEN_IN_PURE: &[&str] = &[
    "tokio",
    "reqwest",
    "axum",
    "dotenvy",
    "tracing-subscriber",
    "guildroster-player",
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;

    let violations = find_violations(&metadata);
    if violations.is_empty() {
        println!("arch-check: ok ({} crates checked)", PURE_CRATES.len());
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} layering violation(s)", violations.len())
}

fn find_violations(metadata: &Metadata) -> Vec<String> {
    metadata
        .packages
        .iter()
        .filter(|pkg| PURE_CRATES.contains(&pkg.name.as_str()))
        .flat_map(|pkg| {
            pkg.dependencies
                .iter()
                // dev-dependencies may use anything
                .filter(|dep| dep.kind.as_deref() != Some("dev"))
                .filter(|dep| FORBIDDEN_IN_PURE.contains(&dep.name.as_str()))
                .map(move |dep| format!("{} depends on {}", pkg.name, dep.name))
        })
        .collect()
}
