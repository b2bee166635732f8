//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tick a named set of checkboxes in a third-party web settings panel,
/// including ones nested in same-origin iframes and open shadow DOM.
#[derive(Parser)]
#[command(name = "checkset")]
#[command(about = "Ensure named checkboxes in a web settings panel are set")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Drive a live browser and ensure every target checkbox is set
    Run {
        /// Panel URL, opened in a freshly launched browser
        #[arg(long, conflicts_with = "attach")]
        url: Option<String>,

        /// DevTools websocket URL of a running browser; adopts its first
        /// tab (use this for panels behind a login)
        #[arg(long)]
        attach: Option<String>,

        /// Launch headless (only meaningful with --url)
        #[arg(long)]
        headless: bool,

        /// File with one target name per line ('#' starts a comment);
        /// defaults to the built-in country allow-list
        #[arg(long)]
        names: Option<PathBuf>,

        /// Clear the target checkboxes instead of setting them
        #[arg(long)]
        uncheck: bool,

        /// Wait longer for slow panels that re-render on load
        #[arg(long)]
        patient: bool,
    },

    /// Check a saved HTML snapshot offline: what would match, what is on
    Audit {
        /// Snapshot file of the settings panel
        file: PathBuf,

        /// File with one target name per line; defaults to the built-in list
        #[arg(long)]
        names: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn clap_surface_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_and_audit_parse() {
        let cli = Cli::parse_from(["checkset", "run", "--url", "http://x", "--headless"]);
        assert!(matches!(cli.command, Command::Run { headless: true, .. }));

        let cli = Cli::parse_from(["checkset", "audit", "panel.html"]);
        assert!(matches!(cli.command, Command::Audit { .. }));
    }

    #[test]
    fn url_and_attach_are_exclusive() {
        let res = Cli::try_parse_from([
            "checkset", "run", "--url", "http://x", "--attach", "ws://y",
        ]);
        assert!(res.is_err());
    }
}
