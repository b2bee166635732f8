//! Core model and logic for ensuring a named set of checkboxes is checked
//! in an externally-owned page: the target list and its matching policy,
//! the [`PageDriver`] seam, the escalating setter chain, the run
//! orchestrator, and the console reporter.

pub mod driver;
pub mod ensure;
pub mod error;
pub mod model;
pub mod report;
pub mod run;
pub mod targets;
pub mod testing;

pub use driver::{ClickSurface, FireResult, PageDriver};
pub use ensure::ensure_checked;
pub use error::{ErrorCategory, RunError};
pub use model::{
    display_name, CheckState, DetailRow, RootReport, RootScope, RunSummary, SetMethod,
    SetOutcome, TargetHandle, TargetSnapshot, NAME_TRUNCATE,
};
pub use report::{print_summary, render_table, totals_line};
pub use run::run_targets;
pub use targets::{TargetSet, DEFAULT_ALLOWLIST};
