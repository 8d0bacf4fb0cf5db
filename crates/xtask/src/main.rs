use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Layering rules: domain depends on no workspace crate, shared depends
/// only on domain, and nothing depends on the client crate.
fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: serde_json::Value =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let packages = metadata["packages"]
        .as_array()
        .context("metadata has no packages array")?;

    let mut violations = Vec::new();
    for package in packages {
        let name = package["name"].as_str().unwrap_or_default();
        let deps: Vec<&str> = package["dependencies"]
            .as_array()
            .map(|deps| {
                deps.iter()
                    .filter_map(|dep| dep["name"].as_str())
                    .filter(|dep| dep.starts_with("playpark-"))
                    .collect()
            })
            .unwrap_or_default();

        match name {
            "playpark-domain" if !deps.is_empty() => {
                violations.push(format!("playpark-domain must not depend on {deps:?}"));
            }
            "playpark-shared" if deps.iter().any(|dep| *dep != "playpark-domain") => {
                violations.push(format!(
                    "playpark-shared may only depend on playpark-domain, found {deps:?}"
                ));
            }
            _ if deps.contains(&"playpark-client") => {
                violations.push(format!("{name} must not depend on playpark-client"));
            }
            _ => {}
        }
    }

    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("arch-check: {violation}");
        }
        anyhow::bail!("{} layering violation(s)", violations.len());
    }

    Ok(())
}
