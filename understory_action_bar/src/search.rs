// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search-collapse controller.
//!
//! A small state machine over [`SearchMode`]:
//!
//! - **Resize heuristic** ([`SearchController::on_resize`]): collapse when the
//!   overflow pass had to hide something and the field is idle (no focus, no
//!   typed value, not full-screen); otherwise expand when the free width exceeds
//!   the configured minimum field width.
//! - **Presentation fallback** ([`SearchController::settle_presentation`]): an
//!   expanded field becomes full-screen while the bar still overflows, and drops
//!   back once it fits.
//! - **Explicit toggles** ([`SearchController::toggle`],
//!   [`SearchController::set_expanded`]): flip directly and pin the result
//!   against the heuristic until [`SearchController::release_pin`] is called.
//!
//! Full-screen always implies expanded; [`SearchState`] cannot express anything else.

/// Presentation mode of the search field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Collapsed to an icon or button.
    #[default]
    Collapsed,
    /// Open inside the bar.
    Expanded,
    /// Open as an overlay on top of the bar.
    FullScreen,
}

/// Snapshot of the search field state.
///
/// ```rust
/// use understory_action_bar::SearchState;
///
/// assert!(SearchState::FULL_SCREEN.is_expanded());
/// assert!(!SearchState::COLLAPSED.is_full_screen());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchState {
    expanded: bool,
    full_screen: bool,
}

impl SearchState {
    /// Collapsed field.
    pub const COLLAPSED: Self = Self {
        expanded: false,
        full_screen: false,
    };
    /// Expanded field inside the bar.
    pub const EXPANDED: Self = Self {
        expanded: true,
        full_screen: false,
    };
    /// Expanded field presented full-screen.
    pub const FULL_SCREEN: Self = Self {
        expanded: true,
        full_screen: true,
    };

    /// Returns `true` if the field is open (inline or full-screen).
    pub const fn is_expanded(self) -> bool {
        self.expanded
    }

    /// Returns `true` if the field overlays the bar.
    pub const fn is_full_screen(self) -> bool {
        self.full_screen
    }

    /// The matching [`SearchMode`].
    pub const fn mode(self) -> SearchMode {
        match (self.expanded, self.full_screen) {
            (_, true) => SearchMode::FullScreen,
            (true, false) => SearchMode::Expanded,
            (false, false) => SearchMode::Collapsed,
        }
    }
}

impl From<SearchMode> for SearchState {
    fn from(mode: SearchMode) -> Self {
        match mode {
            SearchMode::Collapsed => Self::COLLAPSED,
            SearchMode::Expanded => Self::EXPANDED,
            SearchMode::FullScreen => Self::FULL_SCREEN,
        }
    }
}

/// Inputs to the resize heuristic, gathered after an overflow pass.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SearchInputs {
    /// Number of items the pass hid.
    pub hidden_count: usize,
    /// Available width minus the width of everything else in the bar.
    pub free_width: f64,
    /// The field has keyboard focus.
    pub focused: bool,
    /// The field holds a typed value.
    pub has_value: bool,
}

/// A change of [`SearchMode`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchTransition {
    /// Mode before the change.
    pub from: SearchMode,
    /// Mode after the change.
    pub to: SearchMode,
}

impl SearchTransition {
    /// Returns `true` if the expanded flag flipped (full-screen changes alone do not count).
    pub fn expanded_changed(&self) -> bool {
        SearchState::from(self.from).is_expanded() != SearchState::from(self.to).is_expanded()
    }
}

/// State machine deciding whether the search field is collapsed, expanded, or full-screen.
#[derive(Clone, Debug)]
pub struct SearchController {
    mode: SearchMode,
    pinned: bool,
    /// Minimum width the field needs once expanded.
    pub min_width: f64,
    /// When `false`, only explicit toggles change the state.
    pub auto_collapse: bool,
}

impl SearchController {
    /// Create a collapsed controller.
    pub fn new(min_width: f64, auto_collapse: bool) -> Self {
        Self {
            mode: SearchMode::Collapsed,
            pinned: false,
            min_width,
            auto_collapse,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Current state.
    pub fn state(&self) -> SearchState {
        self.mode.into()
    }

    /// Returns `true` while an explicit toggle shields the state from the heuristic.
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// End the interaction that pinned the state.
    pub fn release_pin(&mut self) {
        self.pinned = false;
    }

    /// Apply the resize heuristic.
    ///
    /// Skipped while pinned or when auto-collapse is disabled.
    pub fn on_resize(&mut self, inputs: &SearchInputs) -> Option<SearchTransition> {
        if self.pinned || !self.auto_collapse {
            return None;
        }
        let idle = !inputs.focused && !inputs.has_value;
        let next = if inputs.hidden_count > 0 && idle && self.mode != SearchMode::FullScreen {
            SearchMode::Collapsed
        } else if self.mode == SearchMode::Collapsed && inputs.free_width > self.min_width {
            SearchMode::Expanded
        } else {
            self.mode
        };
        self.transition_to(next)
    }

    /// Flip between collapsed and expanded. Full-screen collapses.
    pub fn toggle(&mut self) -> SearchTransition {
        let next = match self.mode {
            SearchMode::Collapsed => SearchMode::Expanded,
            SearchMode::Expanded | SearchMode::FullScreen => SearchMode::Collapsed,
        };
        let from = self.mode;
        self.mode = next;
        self.pinned = true;
        SearchTransition { from, to: next }
    }

    /// Explicitly open or close the field.
    ///
    /// Pins the state even when it already matches.
    pub fn set_expanded(&mut self, expanded: bool) -> Option<SearchTransition> {
        self.pinned = true;
        let next = match (expanded, self.mode) {
            (true, SearchMode::FullScreen) => SearchMode::FullScreen,
            (true, _) => SearchMode::Expanded,
            (false, _) => SearchMode::Collapsed,
        };
        self.transition_to(next)
    }

    /// Enter or leave full-screen depending on whether the bar still overflows.
    ///
    /// Only affects an expanded field.
    pub fn settle_presentation(&mut self, overflowing: bool) -> Option<SearchTransition> {
        let next = match (self.mode, overflowing) {
            (SearchMode::Expanded, true) => SearchMode::FullScreen,
            (SearchMode::FullScreen, false) => SearchMode::Expanded,
            (mode, _) => mode,
        };
        self.transition_to(next)
    }

    fn transition_to(&mut self, next: SearchMode) -> Option<SearchTransition> {
        if next == self.mode {
            return None;
        }
        let from = self.mode;
        self.mode = next;
        Some(SearchTransition { from, to: next })
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(crate::BarConfig::DEFAULT_MIN_SEARCH_WIDTH, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(hidden_count: usize, free_width: f64) -> SearchInputs {
        SearchInputs {
            hidden_count,
            free_width,
            ..SearchInputs::default()
        }
    }

    fn expanded() -> SearchController {
        let mut c = SearchController::new(200.0, true);
        c.toggle();
        c.release_pin();
        c
    }

    #[test]
    fn starts_collapsed() {
        let c = SearchController::default();
        assert_eq!(c.state(), SearchState::COLLAPSED);
        assert!(!c.is_pinned());
    }

    #[test]
    fn collapses_when_items_were_hidden_and_field_is_idle() {
        let mut c = expanded();
        let t = c.on_resize(&inputs(2, -40.0)).unwrap();
        assert_eq!(t.to, SearchMode::Collapsed);
        assert!(t.expanded_changed());
    }

    #[test]
    fn focus_or_value_keeps_field_open() {
        let mut c = expanded();
        let focused = SearchInputs {
            focused: true,
            ..inputs(3, -40.0)
        };
        assert_eq!(c.on_resize(&focused), None);
        let typed = SearchInputs {
            has_value: true,
            ..inputs(3, -40.0)
        };
        assert_eq!(c.on_resize(&typed), None);
        assert_eq!(c.mode(), SearchMode::Expanded);
    }

    #[test]
    fn expands_only_above_min_width() {
        let mut c = SearchController::new(200.0, true);
        assert_eq!(c.on_resize(&inputs(0, 200.0)), None, "equal width is not enough");
        let t = c.on_resize(&inputs(0, 201.0)).unwrap();
        assert_eq!(t.from, SearchMode::Collapsed);
        assert_eq!(t.to, SearchMode::Expanded);
    }

    #[test]
    fn full_screen_is_not_collapsed_by_resize() {
        let mut c = expanded();
        c.settle_presentation(true);
        assert_eq!(c.mode(), SearchMode::FullScreen);
        assert_eq!(c.on_resize(&inputs(4, -100.0)), None);
        assert!(c.state().is_expanded());
    }

    #[test]
    fn full_screen_follows_overflow() {
        let mut c = expanded();
        let enter = c.settle_presentation(true).unwrap();
        assert!(!enter.expanded_changed());
        assert!(c.state().is_full_screen());
        assert!(c.state().is_expanded());
        let leave = c.settle_presentation(false).unwrap();
        assert_eq!(leave.to, SearchMode::Expanded);
    }

    #[test]
    fn collapsed_field_never_goes_full_screen() {
        let mut c = SearchController::new(200.0, true);
        assert_eq!(c.settle_presentation(true), None);
        assert_eq!(c.state(), SearchState::COLLAPSED);
    }

    #[test]
    fn toggle_pins_against_heuristic() {
        let mut c = SearchController::new(200.0, true);
        c.toggle();
        assert!(c.is_pinned());
        assert_eq!(c.on_resize(&inputs(5, -300.0)), None);
        assert_eq!(c.mode(), SearchMode::Expanded);
        c.release_pin();
        assert_eq!(c.on_resize(&inputs(5, -300.0)).unwrap().to, SearchMode::Collapsed);
    }

    #[test]
    fn toggle_from_full_screen_collapses() {
        let mut c = expanded();
        c.settle_presentation(true);
        let t = c.toggle();
        assert_eq!(t.from, SearchMode::FullScreen);
        assert_eq!(t.to, SearchMode::Collapsed);
    }

    #[test]
    fn disabled_heuristic_ignores_resize() {
        let mut c = SearchController::new(200.0, false);
        assert_eq!(c.on_resize(&inputs(0, 1000.0)), None);
        c.toggle();
        c.release_pin();
        assert_eq!(c.on_resize(&inputs(3, -50.0)), None);
        assert_eq!(c.mode(), SearchMode::Expanded);
    }

    #[test]
    fn set_expanded_keeps_full_screen_open() {
        let mut c = expanded();
        c.settle_presentation(true);
        assert_eq!(c.set_expanded(true), None);
        assert_eq!(c.mode(), SearchMode::FullScreen);
        assert!(c.is_pinned());
        assert_eq!(c.set_expanded(false).unwrap().to, SearchMode::Collapsed);
    }
}
