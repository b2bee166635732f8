//! In-memory page stub for exercising the setter chain and run loop
//! without a browser.
//!
//! [`SimulatedPage`] implements [`PageDriver`] over a hand-built model:
//! each checkbox declares which click surface (if any) its imaginary
//! framework listens on, whether it carries an `aria-checked` mirror, and
//! whether it vanishes between collection and mutation. Roots can be
//! marked inaccessible to stand in for cross-origin frames.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::driver::{ClickSurface, FireResult, PageDriver};
use crate::error::RunError;
use crate::model::{display_name, CheckState, RootScope, TargetHandle, TargetSnapshot};
use crate::targets::TargetSet;

/// Which synthetic-click surface flips this checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickReaction {
    /// No listener anywhere; only the forced write works.
    #[default]
    Ignore,
    /// Listener on the input element.
    OnInput,
    /// Listener on the ancestor label only.
    OnLabel,
}

#[derive(Debug, Clone)]
pub struct SimCheckbox {
    labels: Vec<String>,
    checked: bool,
    aria: Option<String>,
    reaction: ClickReaction,
    vanished: bool,
    events: u32,
}

impl SimCheckbox {
    /// Checkbox wrapped in a single label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::with_labels([label.into()])
    }

    /// Checkbox reachable through several labels (dedup scenarios).
    pub fn with_labels(labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            checked: false,
            aria: None,
            reaction: ClickReaction::Ignore,
            vanished: false,
            events: 0,
        }
    }

    /// Checkbox with no ancestor label at all.
    pub fn bare() -> Self {
        Self::with_labels(Vec::<String>::new())
    }

    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    pub fn aria(mut self, value: impl Into<String>) -> Self {
        self.aria = Some(value.into());
        self
    }

    pub fn reacts(mut self, reaction: ClickReaction) -> Self {
        self.reaction = reaction;
        self
    }

    /// Element disappears after collection; every later access misses.
    pub fn vanished(mut self) -> Self {
        self.vanished = true;
        self
    }

    fn state(&self) -> CheckState {
        CheckState { checked: self.checked, aria: self.aria.clone() }
    }

    fn toggle(&mut self) {
        self.checked = !self.checked;
        if self.aria.is_some() {
            self.aria = Some(self.checked.to_string());
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimRoot {
    scope: String,
    accessible: bool,
    boxes: Vec<SimCheckbox>,
}

impl SimRoot {
    pub fn top(boxes: Vec<SimCheckbox>) -> Self {
        Self { scope: "top".to_string(), accessible: true, boxes }
    }

    pub fn iframe(scope: impl Into<String>, boxes: Vec<SimCheckbox>) -> Self {
        Self { scope: scope.into(), accessible: true, boxes }
    }

    /// Cross-origin stand-in: never enumerated as a root.
    pub fn inaccessible(mut self) -> Self {
        self.accessible = false;
        self
    }
}

pub struct SimulatedPage {
    roots: Mutex<Vec<SimRoot>>,
}

impl SimulatedPage {
    pub fn new(roots: Vec<SimRoot>) -> Self {
        Self { roots: Mutex::new(roots) }
    }

    /// How many synthetic events have landed on this checkbox (any surface).
    pub fn events_fired(&self, handle: &TargetHandle) -> u32 {
        let roots = self.roots.lock().unwrap();
        accessible(&roots)
            .nth(handle.root_index)
            .and_then(|r| r.boxes.get(handle.slot))
            .map(|b| b.events)
            .unwrap_or(0)
    }

    fn with_box<T>(
        &self,
        handle: &TargetHandle,
        f: impl FnOnce(&mut SimCheckbox) -> T,
    ) -> Result<T, RunError> {
        let mut roots = self.roots.lock().unwrap();
        let root = accessible_mut(&mut roots)
            .nth(handle.root_index)
            .ok_or_else(|| RunError::element_not_found(format!("root {}", handle.root_index)))?;
        let b = root
            .boxes
            .get_mut(handle.slot)
            .filter(|b| !b.vanished)
            .ok_or_else(|| {
                RunError::element_not_found(format!("slot {} in root {}", handle.slot, handle.root_index))
            })?;
        Ok(f(b))
    }
}

fn accessible(roots: &[SimRoot]) -> impl Iterator<Item = &SimRoot> {
    roots.iter().filter(|r| r.accessible)
}

fn accessible_mut(roots: &mut [SimRoot]) -> impl Iterator<Item = &mut SimRoot> {
    roots.iter_mut().filter(|r| r.accessible)
}

#[async_trait]
impl PageDriver for SimulatedPage {
    async fn roots(&self) -> Result<Vec<RootScope>, RunError> {
        let roots = self.roots.lock().unwrap();
        Ok(accessible(&roots)
            .enumerate()
            .map(|(index, r)| RootScope { index, scope: r.scope.clone() })
            .collect())
    }

    async fn collect(
        &self,
        root: &RootScope,
        targets: &TargetSet,
    ) -> Result<Vec<TargetSnapshot>, RunError> {
        let roots = self.roots.lock().unwrap();
        let Some(sim_root) = accessible(&roots).nth(root.index) else {
            return Ok(Vec::new());
        };
        Ok(sim_root
            .boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.labels.iter().any(|l| targets.matches(l)))
            .map(|(slot, b)| TargetSnapshot {
                handle: TargetHandle { root_index: root.index, slot },
                name: display_name(b.labels.first().map(String::as_str).unwrap_or("")),
                before: b.state(),
            })
            .collect())
    }

    async fn fire_sequence(
        &self,
        handle: &TargetHandle,
        surface: ClickSurface,
    ) -> Result<FireResult, RunError> {
        self.with_box(handle, |b| {
            if surface == ClickSurface::Label && b.labels.is_empty() {
                return FireResult::NoSurface;
            }
            b.events += 1;
            let listens = match b.reaction {
                ClickReaction::Ignore => false,
                ClickReaction::OnInput => surface == ClickSurface::Input,
                ClickReaction::OnLabel => surface == ClickSurface::Label,
            };
            if listens {
                b.toggle();
            }
            FireResult::Fired
        })
    }

    async fn state(&self, handle: &TargetHandle) -> Result<CheckState, RunError> {
        self.with_box(handle, |b| b.state())
    }

    async fn force_checked(&self, handle: &TargetHandle, value: bool) -> Result<(), RunError> {
        self.with_box(handle, |b| {
            b.checked = value;
            b.aria = Some(value.to_string());
            b.events += 1;
        })
    }
}
