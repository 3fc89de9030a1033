// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overflow calculator: hide candidates, lowest priority first, until the bar fits.
//!
//! ## Algorithm
//!
//! 1. Probe [`BarSurface::measure`]. If the bar is not laid out, return an empty
//!    result without touching visibility.
//! 2. Show every item (and hide the indicator) so the next measurement reflects
//!    the "everything shown" width.
//! 3. Walk unprotected items by ascending `hide_order` (stable). Before each
//!    candidate, re-measure; stop as soon as the content fits.
//! 4. Hide the candidate. The first hidden item that belongs in the overflow menu
//!    turns the indicator on, so its width counts from the next measurement on.
//! 5. No lonely item: if exactly one item was hidden, also hide the next
//!    candidate. If there is none, show the single item again and report nothing
//!    hidden; an indicator is about as wide as one action, so hiding one item
//!    never saves space.
//!
//! Widths are never predicted, only measured, so regions may have any
//! content-dependent size. Because the hidden set is always a prefix of one
//! total order, repeated runs at the same geometry give the same set, and a
//! wider container never hides more.
//!
//! ## Degradation
//!
//! Locators that fail to resolve are skipped as if the item were absent. A
//! measurement failure in the middle of the walk stops the walk; hides applied so
//! far stand.

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::item::{HidableItem, ItemId};
use crate::surface::{BarSurface, Measurement};

/// Set of hidden item ids.
pub type HiddenSet = HashSet<ItemId>;

/// Outcome of one overflow pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverflowResult {
    /// Hidden ids, in the order they were hidden. Never exactly one entry.
    pub hidden_ids: Vec<ItemId>,
    /// Whether the overflow indicator is shown; `true` iff a hidden item belongs
    /// in the overflow menu.
    pub show_overflow_indicator: bool,
    /// Last measurement taken after the final visibility change, if any.
    pub measurement: Option<Measurement>,
}

impl OverflowResult {
    /// Result for a bar that could not be measured.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if the last measurement fitted.
    ///
    /// `false` when the pass lost its measurement.
    pub fn fits(&self) -> bool {
        self.measurement.is_some_and(|m| !m.overflows())
    }

    /// Returns `true` if `id` was hidden.
    pub fn is_hidden(&self, id: &ItemId) -> bool {
        self.hidden_ids.contains(id)
    }

    /// Hidden ids as a set.
    pub fn hidden_set(&self) -> HiddenSet {
        self.hidden_ids.iter().cloned().collect()
    }
}

/// Hide items until the bar fits.
///
/// ```rust
/// use understory_action_bar::{BarSurface, HidableItem, Measurement, SurfaceError, compute_overflow};
///
/// /// Three 100-wide regions in a 250-wide container.
/// struct Bar {
///     visible: [bool; 3],
/// }
///
/// impl BarSurface<usize> for Bar {
///     fn measure(&mut self) -> Result<Measurement, SurfaceError> {
///         let shown = self.visible.iter().filter(|v| **v).count();
///         Ok(Measurement::from_widths(250.0, 100.0 * shown as f64))
///     }
///
///     fn set_visible(&mut self, locator: &usize, visible: bool) -> Result<(), SurfaceError> {
///         let slot = self.visible.get_mut(*locator).ok_or(SurfaceError::UnresolvedLocator)?;
///         *slot = visible;
///         Ok(())
///     }
/// }
///
/// let locators = [0_usize, 1, 2];
/// let items: Vec<_> = locators
///     .iter()
///     .map(|l| HidableItem::new(format!("region-{l}"), l, *l as i32))
///     .collect();
///
/// let mut bar = Bar { visible: [false; 3] };
/// let result = compute_overflow(&items, &mut bar);
///
/// // One hide would fit, but a lonely hidden item is always paired with the next.
/// assert_eq!(result.hidden_ids.len(), 2);
/// assert_eq!(bar.visible, [false, false, true]);
/// ```
pub fn compute_overflow<L, S>(items: &[HidableItem<'_, L>], surface: &mut S) -> OverflowResult
where
    S: BarSurface<L> + ?Sized,
{
    if let Err(err) = surface.measure() {
        tracing::warn!(%err, "skipping overflow pass");
        return OverflowResult::empty();
    }

    surface.set_overflow_indicator(false);
    let mut candidates: Vec<usize> = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        if let Err(err) = surface.set_visible(item.locator, true) {
            tracing::warn!(id = %item.id, %err, "skipping unresolved item");
            continue;
        }
        if !item.is_protected() {
            candidates.push(idx);
        }
    }
    // Stable: equal hide orders keep list order.
    candidates.sort_by_key(|&idx| items[idx].hide_order);

    let mut pass = Pass {
        items,
        hidden: Vec::new(),
        indicator: false,
        dirty: true,
        measurement: None,
    };

    let mut cursor = 0;
    while cursor < candidates.len() {
        let Some(m) = pass.measure(surface) else {
            // Stopped without a reliable reading; the lonely-item rule still applies.
            break;
        };
        tracing::trace!(
            available = m.available(),
            required = m.required(),
            hidden = pass.hidden.len(),
            "measured bar"
        );
        if !m.overflows() {
            break;
        }
        pass.hide(surface, candidates[cursor]);
        cursor += 1;
    }

    if pass.hidden.len() == 1 {
        while cursor < candidates.len() && pass.hidden.len() == 1 {
            pass.hide(surface, candidates[cursor]);
            cursor += 1;
        }
        if pass.hidden.len() == 1 {
            pass.restore_single(surface);
        }
    }

    if pass.dirty {
        pass.measure(surface);
    }

    OverflowResult {
        hidden_ids: pass
            .hidden
            .iter()
            .map(|&idx| items[idx].id.clone())
            .collect(),
        show_overflow_indicator: pass.indicator,
        measurement: pass.measurement,
    }
}

/// Mutable state of one walk.
struct Pass<'i, 'a, L> {
    items: &'i [HidableItem<'a, L>],
    hidden: Vec<usize>,
    indicator: bool,
    /// Visibility changed since the last measurement.
    dirty: bool,
    measurement: Option<Measurement>,
}

impl<L> Pass<'_, '_, L> {
    fn measure<S: BarSurface<L> + ?Sized>(&mut self, surface: &mut S) -> Option<Measurement> {
        self.dirty = false;
        match surface.measure() {
            Ok(m) => {
                self.measurement = Some(m);
                Some(m)
            }
            Err(err) => {
                tracing::warn!(%err, "measurement lost during overflow pass");
                self.measurement = None;
                None
            }
        }
    }

    fn hide<S: BarSurface<L> + ?Sized>(&mut self, surface: &mut S, idx: usize) {
        let item = &self.items[idx];
        if let Err(err) = surface.set_visible(item.locator, false) {
            tracing::warn!(id = %item.id, %err, "skipping unresolved item");
            return;
        }
        tracing::trace!(id = %item.id, hide_order = item.hide_order, "hid item");
        self.hidden.push(idx);
        self.dirty = true;
        if item.shows_in_overflow_menu() && !self.indicator {
            self.indicator = true;
            surface.set_overflow_indicator(true);
        }
    }

    fn restore_single<S: BarSurface<L> + ?Sized>(&mut self, surface: &mut S) {
        let Some(idx) = self.hidden.pop() else {
            return;
        };
        let item = &self.items[idx];
        tracing::trace!(id = %item.id, "no partner for lonely item; showing it again");
        if let Err(err) = surface.set_visible(item.locator, true) {
            tracing::warn!(id = %item.id, %err, "lonely item could not be shown again");
        }
        self.dirty = true;
        if self.indicator {
            self.indicator = false;
            surface.set_overflow_indicator(false);
        }
    }
}
