// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The action bar pipeline.
//!
//! One run:
//!
//! 1. Probe the surface; a bar that is not laid out yields an empty report.
//! 2. Classify the available width into a [`Breakpoint`].
//! 3. Build the candidate list for the current search state.
//! 4. Run the overflow calculator.
//! 5. Feed the result to the search controller. If the expanded flag flips, the
//!    surface presents the new state and exactly one correction pass runs.
//! 6. Enter or leave full-screen search depending on whether the bar still overflows.
//! 7. Project the overflow menu and collect notifications.
//!
//! The engine keeps only ids between runs: the previous hidden set (so hidden
//! items stay hidden absent a width change) and the previous set of hidden
//! content items (for change notifications). Locators are borrowed per run.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::breakpoint::Breakpoint;
use crate::config::{BarConfig, ConfigError};
use crate::item::{HidableItem, ItemId, ItemOrigin};
use crate::menu::OverflowMenu;
use crate::overflow::{HiddenSet, OverflowResult, compute_overflow};
use crate::priority::build_priority_list;
use crate::search::{SearchController, SearchInputs, SearchMode, SearchState};
use crate::snapshot::BarSnapshot;
use crate::surface::BarSurface;

/// Why the host re-runs the pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The container was resized. Ends any pinned explicit toggle.
    Resize,
    /// Items were added or removed, or other host state changed.
    StateChange,
    /// The user toggled the search field.
    UserToggle,
}

/// Notifications the host relays after a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BarEvent {
    /// The set of hidden content items changed. Carries the hidden content ids in bar order.
    ContentVisibilityChange {
        /// Hidden content item ids.
        hidden: Vec<ItemId>,
    },
    /// The search field opened or closed.
    SearchFieldToggle {
        /// New expanded flag.
        expanded: bool,
    },
}

/// Everything one run decided.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Final overflow result.
    pub result: OverflowResult,
    /// Search state after the run.
    pub search: SearchState,
    /// Size class of the container, if it could be measured.
    pub breakpoint: Option<Breakpoint>,
    /// Overflow popover content.
    pub menu: OverflowMenu,
    /// Notifications to relay, in order.
    pub events: SmallVec<[BarEvent; 2]>,
    /// Number of overflow passes performed (0, 1, or 2).
    pub passes: u8,
}

/// Overflow and search-collapse engine for one bar.
///
/// ```rust
/// use understory_action_bar::{
///     ActionBar, ActionConfig, ActionRole, BarSnapshot, BarSurface, Measurement, SurfaceError,
///     Trigger,
/// };
///
/// /// Every region is 100 wide; the container is 350 wide.
/// struct Bar {
///     visible: Vec<bool>,
/// }
///
/// impl BarSurface<usize> for Bar {
///     fn measure(&mut self) -> Result<Measurement, SurfaceError> {
///         let shown = self.visible.iter().filter(|v| **v).count();
///         Ok(Measurement::from_widths(350.0, 100.0 * shown as f64))
///     }
///
///     fn set_visible(&mut self, locator: &usize, visible: bool) -> Result<(), SurfaceError> {
///         let slot = self.visible.get_mut(*locator).ok_or(SurfaceError::UnresolvedLocator)?;
///         *slot = visible;
///         Ok(())
///     }
/// }
///
/// let snapshot = BarSnapshot::new()
///     .with_content("title", 0)
///     .with_action(ActionConfig::new("bell", ActionRole::Notifications, 1))
///     .with_action(ActionConfig::new("help", ActionRole::Other, 2))
///     .with_action(ActionConfig::new("me", ActionRole::Profile, 3));
///
/// let mut bar = Bar { visible: vec![true; 4] };
/// let mut engine = ActionBar::default();
/// let report = engine.run(&snapshot, &mut bar, Trigger::Resize);
///
/// // Actions go first; the profile is protected.
/// let hidden: Vec<_> = report.result.hidden_ids.iter().map(|id| id.as_str()).collect();
/// assert_eq!(hidden, ["action:bell", "action:help"]);
/// assert!(report.result.show_overflow_indicator);
/// assert_eq!(report.menu.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ActionBar {
    config: BarConfig,
    search: SearchController,
    previous_hidden: HiddenSet,
    content_hidden: HiddenSet,
    reported_expanded: bool,
    breakpoint: Option<Breakpoint>,
}

impl ActionBar {
    /// Create an engine after validating `config`. The search field starts collapsed.
    pub fn new(config: BarConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: BarConfig) -> Self {
        let search = SearchController::new(config.min_search_width, !config.disable_search_collapse);
        Self {
            config,
            search,
            previous_hidden: HiddenSet::new(),
            content_hidden: HiddenSet::new(),
            reported_expanded: false,
            breakpoint: None,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    /// Current search state.
    pub fn search_state(&self) -> SearchState {
        self.search.state()
    }

    /// Size class from the last run that could measure the container.
    pub fn breakpoint(&self) -> Option<Breakpoint> {
        self.breakpoint
    }

    /// Ids hidden by the last completed run.
    pub fn hidden(&self) -> &HiddenSet {
        &self.previous_hidden
    }

    /// Turn the resize-driven collapse/expand heuristic off or back on.
    pub fn set_search_collapse_disabled(&mut self, disabled: bool) {
        self.config.disable_search_collapse = disabled;
        self.search.auto_collapse = !disabled;
    }

    /// Forget what previous runs hid. The search state is kept.
    pub fn reset(&mut self) {
        self.previous_hidden.clear();
        self.content_hidden.clear();
    }

    /// Flip the search field between collapsed and expanded, then run one pass.
    ///
    /// The new state is pinned against the resize heuristic until the next
    /// [`Trigger::Resize`] run.
    pub fn toggle_search<L, S>(&mut self, snapshot: &BarSnapshot<L>, surface: &mut S) -> RunReport
    where
        S: BarSurface<L> + ?Sized,
    {
        let transition = self.search.toggle();
        tracing::debug!(from = ?transition.from, to = ?transition.to, "search toggled by user");
        surface.apply_search_state(self.search.state());
        self.run(snapshot, surface, Trigger::UserToggle)
    }

    /// Relay an explicit open or close of the search field, then run one pass.
    pub fn set_search_expanded<L, S>(
        &mut self,
        expanded: bool,
        snapshot: &BarSnapshot<L>,
        surface: &mut S,
    ) -> RunReport
    where
        S: BarSurface<L> + ?Sized,
    {
        if let Some(transition) = self.search.set_expanded(expanded) {
            tracing::debug!(from = ?transition.from, to = ?transition.to, "search set by host");
            surface.apply_search_state(self.search.state());
        }
        self.run(snapshot, surface, Trigger::UserToggle)
    }

    /// Run the pipeline over `snapshot`, applying visibility through `surface`.
    pub fn run<L, S>(
        &mut self,
        snapshot: &BarSnapshot<L>,
        surface: &mut S,
        trigger: Trigger,
    ) -> RunReport
    where
        S: BarSurface<L> + ?Sized,
    {
        if trigger == Trigger::Resize {
            self.search.release_pin();
        }

        let probe = match surface.measure() {
            Ok(m) => m,
            Err(err) => {
                tracing::warn!(?trigger, %err, "bar not measurable; run skipped");
                let mut events = SmallVec::new();
                self.push_search_toggle(&mut events);
                return RunReport {
                    result: OverflowResult::empty(),
                    search: self.search.state(),
                    breakpoint: None,
                    menu: OverflowMenu::default(),
                    events,
                    passes: 0,
                };
            }
        };

        let breakpoint = self.config.breakpoints.classify(probe.available());
        self.breakpoint = Some(breakpoint);

        let kind = self.config.search_kind;
        let mut items = build_priority_list(snapshot, self.search.state(), kind, &self.previous_hidden);
        let mut result = compute_overflow(&items, surface);
        let mut passes = 1;

        if snapshot.search.is_some() {
            let status = snapshot.search_status();
            let inputs = SearchInputs {
                hidden_count: result.hidden_ids.len(),
                free_width: self.free_width(&items, &result, surface),
                focused: status.focused,
                has_value: status.has_value,
            };
            if let Some(transition) = self.search.on_resize(&inputs) {
                tracing::debug!(from = ?transition.from, to = ?transition.to, ?inputs, "search heuristic");
                surface.apply_search_state(self.search.state());
                if transition.expanded_changed() {
                    let previous = result.hidden_set();
                    items = build_priority_list(snapshot, self.search.state(), kind, &previous);
                    result = compute_overflow(&items, surface);
                    passes = 2;
                }
            }

            let overflowing = !result.fits() || result.is_hidden(&ItemId::search());
            if let Some(transition) = self.search.settle_presentation(overflowing) {
                tracing::debug!(from = ?transition.from, to = ?transition.to, "search presentation");
                surface.apply_search_state(self.search.state());
            }
        }

        let menu = OverflowMenu::project(&items, &result);
        let mut events = SmallVec::new();
        self.push_content_change(&items, &result, &mut events);
        self.push_search_toggle(&mut events);
        self.previous_hidden = result.hidden_set();

        tracing::debug!(
            ?trigger,
            %breakpoint,
            hidden = ?result.hidden_ids,
            indicator = result.show_overflow_indicator,
            search = ?self.search.mode(),
            passes,
            "action bar run"
        );

        RunReport {
            result,
            search: self.search.state(),
            breakpoint: Some(breakpoint),
            menu,
            events,
            passes,
        }
    }

    /// Width left for the search field: available minus everything else in the bar.
    ///
    /// While the heuristic may expand a shown, collapsed field, the affordance is
    /// hidden for one extra measurement and shown again, so its own width does not
    /// count against the room it could grow into.
    fn free_width<L, S>(
        &self,
        items: &[HidableItem<'_, L>],
        result: &OverflowResult,
        surface: &mut S,
    ) -> f64
    where
        S: BarSurface<L> + ?Sized,
    {
        let measured = result.measurement.map_or(0.0, |m| m.free_width());
        let may_expand = self.search.auto_collapse
            && !self.search.is_pinned()
            && self.search.mode() == SearchMode::Collapsed;
        if !may_expand {
            return measured;
        }
        let Some(search) = items
            .iter()
            .find(|i| i.id.is_search() && !result.is_hidden(&i.id))
        else {
            return measured;
        };
        if let Err(err) = surface.set_visible(search.locator, false) {
            tracing::warn!(%err, "search affordance not resolvable; using measured free width");
            return measured;
        }
        let without_search = surface.measure();
        if let Err(err) = surface.set_visible(search.locator, true) {
            tracing::warn!(%err, "search affordance could not be shown again");
        }
        match without_search {
            Ok(m) => {
                tracing::trace!(free = m.free_width(), "measured room for search field");
                m.free_width()
            }
            Err(err) => {
                tracing::warn!(%err, "measurement lost while sizing search field");
                measured
            }
        }
    }

    fn push_content_change<L>(
        &mut self,
        items: &[HidableItem<'_, L>],
        result: &OverflowResult,
        events: &mut SmallVec<[BarEvent; 2]>,
    ) {
        let mut hidden: Vec<&HidableItem<'_, L>> = items
            .iter()
            .filter(|i| i.origin == ItemOrigin::Content && result.is_hidden(&i.id))
            .collect();
        let now: HiddenSet = hidden.iter().map(|i| i.id.clone()).collect();
        if now == self.content_hidden {
            return;
        }
        hidden.sort_by_key(|i| i.position);
        events.push(BarEvent::ContentVisibilityChange {
            hidden: hidden.into_iter().map(|i| i.id.clone()).collect(),
        });
        self.content_hidden = now;
    }

    fn push_search_toggle(&mut self, events: &mut SmallVec<[BarEvent; 2]>) {
        let expanded = self.search.state().is_expanded();
        if expanded != self.reported_expanded {
            self.reported_expanded = expanded;
            events.push(BarEvent::SearchFieldToggle { expanded });
        }
    }
}

impl Default for ActionBar {
    fn default() -> Self {
        Self::with_valid_config(BarConfig::default())
    }
}
