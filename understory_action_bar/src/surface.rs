// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host surface: measurement and visibility toggles behind a trait.

use kurbo::Rect;

use crate::search::SearchState;

/// Errors a host surface can report.
///
/// The engine never propagates these to its caller; every error degrades to a
/// safe no-op (see [`compute_overflow`](crate::compute_overflow)).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The outer or inner box is not attached or not laid out yet.
    #[error("bar is not laid out")]
    Detached,
    /// A locator does not resolve to a live region.
    #[error("locator does not resolve to a region")]
    UnresolvedLocator,
}

/// The two boxes measured on every pass.
///
/// `outer` is the container the bar may use; `inner` is the box its visible
/// content currently needs. Only horizontal extents matter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measurement {
    /// Box of the available (outer) container.
    pub outer: Rect,
    /// Box of the required (inner) content.
    pub inner: Rect,
}

impl Measurement {
    /// Create a measurement from the outer and inner boxes.
    pub const fn new(outer: Rect, inner: Rect) -> Self {
        Self { outer, inner }
    }

    /// Create a measurement from bare widths.
    pub fn from_widths(available: f64, required: f64) -> Self {
        Self {
            outer: Rect::new(0.0, 0.0, available.max(0.0), 0.0),
            inner: Rect::new(0.0, 0.0, required.max(0.0), 0.0),
        }
    }

    /// Width of the outer box.
    pub fn available(&self) -> f64 {
        self.outer.width()
    }

    /// Width of the inner box.
    pub fn required(&self) -> f64 {
        self.inner.width()
    }

    /// Returns `true` if the content does not fit. Equal widths fit.
    pub fn overflows(&self) -> bool {
        self.required() > self.available()
    }

    /// Space left over once the content is laid out. Negative while overflowing.
    pub fn free_width(&self) -> f64 {
        self.available() - self.required()
    }
}

/// Host-side registry of bar regions.
///
/// The engine resolves locators through this trait only, which keeps it free of
/// any platform element lookup. The engine is the sole writer during a run: the
/// host must not toggle visibility concurrently.
pub trait BarSurface<L: ?Sized> {
    /// Read the outer and inner boxes. This is a synchronous layout read.
    fn measure(&mut self) -> Result<Measurement, SurfaceError>;

    /// Show or hide the region `locator` resolves to.
    fn set_visible(&mut self, locator: &L, visible: bool) -> Result<(), SurfaceError>;

    /// Show or hide the overflow indicator.
    ///
    /// Once shown, later [`measure`](Self::measure) calls must count its width.
    fn set_overflow_indicator(&mut self, visible: bool) {
        let _ = visible;
    }

    /// Present the search field in the given state.
    ///
    /// Called before a correction pass so the next measurement reflects the
    /// collapsed or expanded field. A full-screen field overlays the bar; its
    /// in-bar region must still measure as expanded.
    fn apply_search_state(&mut self, state: SearchState) {
        let _ = state;
    }
}
