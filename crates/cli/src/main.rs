mod cli;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use checkset_audit::audit_html;
use checkset_browser::{BrowserSession, LaunchConfig, TimeoutConfig};
use checkset_core::{print_summary, run_targets, RunError, TargetSet};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match dispatch(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(cli: Cli) -> Result<(), RunError> {
    match cli.command {
        Command::Run { url, attach, headless, names, uncheck, patient } => {
            let targets = load_targets(names.as_deref())?;
            let timeouts = if patient { TimeoutConfig::patient() } else { TimeoutConfig::default() };
            let want = !uncheck;

            let (_session, page) = if let Some(url) = url {
                let session = BrowserSession::launch(&LaunchConfig {
                    headless,
                    ..Default::default()
                })
                .await?;
                let page = session.open(&url, timeouts).await?;
                (session, page)
            } else if let Some(ws) = attach {
                let session = BrowserSession::attach(&ws).await?;
                let page = session.current_page(timeouts).await?;
                (session, page)
            } else {
                return Err(RunError::browser_error("Pass --url or --attach"));
            };

            info!(targets = targets.len(), want, "starting run");
            let summary = run_targets(&page, &targets, want).await?;
            print_summary(&summary);
            Ok(())
        }

        Command::Audit { file, names } => {
            let targets = load_targets(names.as_deref())?;
            let html = std::fs::read_to_string(&file).map_err(|e| {
                RunError::parsing_error(format!("Cannot read {}: {}", file.display(), e))
            })?;
            let report = audit_html(&html, &targets)?;
            print!("{}", report.render());
            Ok(())
        }
    }
}

fn load_targets(names: Option<&Path>) -> Result<TargetSet, RunError> {
    let Some(path) = names else {
        return Ok(TargetSet::default_allowlist());
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| RunError::parsing_error(format!("Cannot read {}: {}", path.display(), e)))?;
    let parsed = parse_names(&content);
    if parsed.is_empty() {
        return Err(RunError::parsing_error(format!(
            "{} contains no target names",
            path.display()
        )));
    }
    Ok(TargetSet::new(parsed))
}

fn parse_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_file_format() {
        let parsed = parse_names("France\n\n# comment\n  Belgium  \n");
        assert_eq!(parsed, vec!["France", "Belgium"]);
    }

    #[test]
    fn missing_names_file_falls_back_to_builtin() {
        let set = load_targets(None).unwrap();
        assert_eq!(set.len(), 45);
    }
}
