// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use crate::breakpoint::BreakpointTable;

/// Errors reported while validating a [`BarConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Breakpoint bounds are not finite and strictly ascending.
    #[error("breakpoint bounds must be finite and strictly ascending")]
    UnsortedBreakpoints,
    /// The minimum search width is negative or not finite.
    #[error("minimum search width must be a finite, non-negative number")]
    InvalidMinSearchWidth,
    /// The resize throttle interval is zero.
    #[error("resize throttle interval must be at least one millisecond")]
    ZeroThrottleInterval,
}

/// How the host's search field collapses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchFieldKind {
    /// The field collapses itself to an icon; the field region is the search
    /// candidate in both states.
    #[default]
    SelfCollapsible,
    /// A separate button stands in for the collapsed field; the button is the
    /// candidate while collapsed and the field region while expanded.
    Legacy,
}

/// Configuration for an [`ActionBar`](crate::ActionBar).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BarConfig {
    /// Minimum width of an expanded search field, in the same units as measurements.
    ///
    /// Usually read from a themeable size variable.
    pub min_search_width: f64,
    /// Disable the resize-driven collapse/expand heuristic.
    ///
    /// Only explicit toggles change the search state when set.
    pub disable_search_collapse: bool,
    /// Collapse capability of the search field.
    pub search_kind: SearchFieldKind,
    /// Breakpoint bounds used to classify the container width.
    pub breakpoints: BreakpointTable,
    /// Suggested interval for throttling resize signals, in milliseconds.
    pub resize_throttle_ms: u64,
}

impl BarConfig {
    /// Default minimum search width.
    pub const DEFAULT_MIN_SEARCH_WIDTH: f64 = 240.0;
    /// Default resize throttle interval.
    pub const DEFAULT_RESIZE_THROTTLE_MS: u64 = 100;

    /// Check every value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_search_width.is_finite() || self.min_search_width < 0.0 {
            return Err(ConfigError::InvalidMinSearchWidth);
        }
        if self.resize_throttle_ms == 0 {
            return Err(ConfigError::ZeroThrottleInterval);
        }
        self.breakpoints.validate()
    }
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            min_search_width: Self::DEFAULT_MIN_SEARCH_WIDTH,
            disable_search_collapse: false,
            search_kind: SearchFieldKind::default(),
            breakpoints: BreakpointTable::default(),
            resize_throttle_ms: Self::DEFAULT_RESIZE_THROTTLE_MS,
        }
    }
}
