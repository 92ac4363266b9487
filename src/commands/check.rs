use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use crate::cli::Cli;
use manylicenses::config::load_config;
use manylicenses::{read_inventory, run_audit, AuditError, AuditOptions, NodeModules, Policy, PolicySettings};

/// Read the inventory, apply the policy and report. Violations map to exit
/// status 1; input and I/O failures are returned as errors.
pub fn handle_check(cli: Cli) -> Result<ExitCode> {
    let project_dir = match cli.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    // Command-line lists first, then the project's package.json
    let mut settings = PolicySettings {
        approve: cli.approve,
        exclude: cli.exclude,
        exclude_prefix: cli.exclude_prefix,
        verify: !cli.no_verify,
    };
    if let Some(config) = load_config(&project_dir) {
        settings.extend(config.into_settings());
    }
    let policy = Policy::from(settings);
    tracing::debug!(
        approved = ?policy.approved_licenses().collect::<Vec<_>>(),
        excluded = ?policy.excluded_names().collect::<Vec<_>>(),
        prefixes = ?policy.excluded_prefixes(),
        verify = policy.requires_verification(),
        "policy ready"
    );

    let table = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open inventory file: {}", path.display()))?;
            read_inventory(BufReader::new(file))
        }
        None => read_inventory(io::stdin().lock()),
    }
    .context("Failed to load inventory")?;

    let options = AuditOptions {
        counts: cli.counts,
        csv: cli.csv,
    };
    let manifests = NodeModules::in_project(&project_dir);

    match run_audit(&table, &policy, options, &manifests, io::stdout().lock(), io::stderr().lock()) {
        Ok(summary) => {
            tracing::info!(reported = summary.reported, excluded = summary.excluded, "no unapproved licenses");
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ AuditError::Unapproved { .. }) => {
            eprintln!("{}", e);
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to write report")),
    }
}
