// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated bar surface for unit tests.

use alloc::vec::Vec;

use crate::search::SearchState;
use crate::surface::{BarSurface, Measurement, SurfaceError};

#[derive(Clone, Debug)]
struct Region {
    width: f64,
    /// Width once the search field is expanded; `None` for ordinary regions.
    expanded_width: Option<f64>,
    visible: bool,
    broken: bool,
    /// Refuses to be shown again once hidden.
    sticks_hidden: bool,
}

/// A bar whose regions have fixed widths, addressed by index.
///
/// Required width is the sum of visible regions, the fixed (unhidable) width,
/// and the indicator width while it is shown.
#[derive(Clone, Debug)]
pub(crate) struct FakeBar {
    available: f64,
    fixed: f64,
    indicator_width: f64,
    indicator_visible: bool,
    regions: Vec<Region>,
    search_state: SearchState,
    detached: bool,
    visibility_writes: usize,
    measures: usize,
}

impl FakeBar {
    pub(crate) fn new(available: f64) -> Self {
        Self {
            available,
            fixed: 0.0,
            indicator_width: 0.0,
            indicator_visible: false,
            regions: Vec::new(),
            search_state: SearchState::COLLAPSED,
            detached: false,
            visibility_writes: 0,
            measures: 0,
        }
    }

    pub(crate) fn with_indicator_width(mut self, width: f64) -> Self {
        self.indicator_width = width;
        self
    }

    pub(crate) fn with_fixed_width(mut self, width: f64) -> Self {
        self.fixed = width;
        self
    }

    /// Add a visible region and return its locator.
    pub(crate) fn region(&mut self, width: f64) -> usize {
        self.regions.push(Region {
            width,
            expanded_width: None,
            visible: true,
            broken: false,
            sticks_hidden: false,
        });
        self.regions.len() - 1
    }

    /// Add a search field region whose width follows the applied search state.
    pub(crate) fn search_region(&mut self, collapsed: f64, expanded: f64) -> usize {
        self.regions.push(Region {
            width: collapsed,
            expanded_width: Some(expanded),
            visible: true,
            broken: false,
            sticks_hidden: false,
        });
        self.regions.len() - 1
    }

    pub(crate) fn set_available(&mut self, available: f64) {
        self.available = available;
    }

    pub(crate) fn detach(&mut self) {
        self.detached = true;
    }

    pub(crate) fn attach(&mut self) {
        self.detached = false;
    }

    /// Make a region unresolvable while it keeps taking space.
    pub(crate) fn break_region(&mut self, locator: usize) {
        self.regions[locator].broken = true;
    }

    /// Make a region fail to show again after it has been hidden.
    pub(crate) fn stick_when_hidden(&mut self, locator: usize) {
        self.regions[locator].sticks_hidden = true;
    }

    /// Toggle a region without counting it as an engine write.
    pub(crate) fn set_visible_raw(&mut self, locator: usize, visible: bool) {
        self.regions[locator].visible = visible;
    }

    pub(crate) fn is_visible(&self, locator: usize) -> bool {
        self.regions[locator].visible
    }

    pub(crate) fn indicator_visible(&self) -> bool {
        self.indicator_visible
    }

    pub(crate) fn search_state(&self) -> SearchState {
        self.search_state
    }

    pub(crate) fn visibility_writes(&self) -> usize {
        self.visibility_writes
    }

    pub(crate) fn measures(&self) -> usize {
        self.measures
    }

    fn region_width(&self, region: &Region) -> f64 {
        match region.expanded_width {
            Some(expanded) if self.search_state.is_expanded() => expanded,
            _ => region.width,
        }
    }
}

impl BarSurface<usize> for FakeBar {
    fn measure(&mut self) -> Result<Measurement, SurfaceError> {
        if self.detached {
            return Err(SurfaceError::Detached);
        }
        self.measures += 1;
        let content: f64 = self
            .regions
            .iter()
            .filter(|r| r.visible)
            .map(|r| self.region_width(r))
            .sum();
        let indicator = if self.indicator_visible {
            self.indicator_width
        } else {
            0.0
        };
        Ok(Measurement::from_widths(
            self.available,
            self.fixed + content + indicator,
        ))
    }

    fn set_visible(&mut self, locator: &usize, visible: bool) -> Result<(), SurfaceError> {
        let region = self
            .regions
            .get_mut(*locator)
            .filter(|r| !r.broken && !(visible && r.sticks_hidden && !r.visible))
            .ok_or(SurfaceError::UnresolvedLocator)?;
        region.visible = visible;
        self.visibility_writes += 1;
        Ok(())
    }

    fn set_overflow_indicator(&mut self, visible: bool) {
        self.indicator_visible = visible;
    }

    fn apply_search_state(&mut self, state: SearchState) {
        self.search_state = state;
    }
}
