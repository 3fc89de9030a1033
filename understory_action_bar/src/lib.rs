// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Action Bar: overflow and search-collapse engine for responsive action bars.
//!
//! A shell bar holds branding, content items, a search field, custom items, and
//! a row of actions. When the container gets too narrow, something has to give.
//! This crate decides what:
//!
//! - The **priority list builder** ([`build_priority_list`]) flattens a host
//!   [`BarSnapshot`] into ordered [`HidableItem`]s. The order depends on whether the
//!   search field is open ([`PriorityStrategy`]), and items hidden by the previous
//!   run stay hidden first.
//! - The **overflow calculator** ([`compute_overflow`]) hides candidates one by one,
//!   re-measuring through a [`BarSurface`] before each, until the bar fits. It never
//!   hides exactly one item, and only shows the overflow indicator when a hidden
//!   item reappears in the [`OverflowMenu`].
//! - The **search controller** ([`SearchController`]) collapses an idle search field
//!   when space runs out, expands it when there is room, and falls back to a
//!   full-screen presentation when an open field still does not fit.
//! - The **engine** ([`ActionBar`]) ties these together: one overflow pass, a search
//!   decision, at most one correction pass, and change notifications ([`BarEvent`]).
//!
//! Widths are never predicted. The host measures its real layout, so items may
//! have any content-dependent size.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_action_bar::{
//!     ActionBar, ActionConfig, ActionRole, BarEvent, BarSnapshot, BarSurface, Measurement,
//!     SurfaceError, Trigger,
//! };
//!
//! /// A bar of 100-wide regions in a 250-wide container.
//! struct Bar {
//!     visible: Vec<bool>,
//! }
//!
//! impl BarSurface<usize> for Bar {
//!     fn measure(&mut self) -> Result<Measurement, SurfaceError> {
//!         let shown = self.visible.iter().filter(|v| **v).count();
//!         Ok(Measurement::from_widths(250.0, 100.0 * shown as f64))
//!     }
//!
//!     fn set_visible(&mut self, locator: &usize, visible: bool) -> Result<(), SurfaceError> {
//!         let slot = self.visible.get_mut(*locator).ok_or(SurfaceError::UnresolvedLocator)?;
//!         *slot = visible;
//!         Ok(())
//!     }
//! }
//!
//! let snapshot = BarSnapshot::new()
//!     .with_content("title", 0)
//!     .with_content("tabs", 1)
//!     .with_content("filters", 2)
//!     .with_action(ActionConfig::new("me", ActionRole::Profile, 3));
//!
//! let mut bar = Bar { visible: vec![true; 4] };
//! let mut engine = ActionBar::default();
//! let report = engine.run(&snapshot, &mut bar, Trigger::Resize);
//!
//! // Two content items vanish; content never needs the overflow indicator.
//! assert_eq!(report.result.hidden_ids.len(), 2);
//! assert!(!report.result.show_overflow_indicator);
//! assert!(matches!(report.events[0], BarEvent::ContentVisibilityChange { .. }));
//! ```
//!
//! ## Hosting
//!
//! The host owns the layout. It implements [`BarSurface`] over whatever handle
//! type resolves to a region in its tree, rebuilds a [`BarSnapshot`] when items
//! change, and calls [`ActionBar::run`] on resize (throttled with
//! [`ResizeThrottle`]) and on state changes. User toggles of the search field go
//! through [`ActionBar::toggle_search`].
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo` and `tracing`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`BarConfig`] and its parts.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod breakpoint;
mod config;
mod engine;
mod item;
mod menu;
mod overflow;
mod priority;
mod search;
mod snapshot;
mod surface;
mod throttle;

#[cfg(test)]
mod test_support;

pub use breakpoint::{Breakpoint, BreakpointTable};
pub use config::{BarConfig, ConfigError, SearchFieldKind};
pub use engine::{ActionBar, BarEvent, RunReport, Trigger};
pub use item::{HidableItem, ItemFlags, ItemId, ItemOrigin};
pub use menu::{MenuOrigin, OverflowMenu, OverflowMenuEntry};
pub use overflow::{HiddenSet, OverflowResult, compute_overflow};
pub use priority::{PriorityStrategy, build_priority_list};
pub use search::{SearchController, SearchInputs, SearchMode, SearchState, SearchTransition};
pub use snapshot::{
    ActionConfig, ActionRole, BarSnapshot, ContentItem, CustomItem, SearchFieldStatus, SearchSlot,
};
pub use surface::{BarSurface, Measurement, SurfaceError};
pub use throttle::ResizeThrottle;
