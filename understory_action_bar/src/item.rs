// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hidable items: identifiers, flags, and the per-run candidate record.

use alloc::string::String;
use core::fmt;

/// Stable identifier of a bar region.
///
/// Identifiers are derived from the region's slot identifier, never from its
/// position in a list, so identity survives reordering. Each family gets its own
/// prefix, which keeps ids unique across families.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Identifier of the search affordance (field or button).
    pub const SEARCH: &'static str = "search";

    /// Wrap a raw identifier as-is.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Identifier for a content item living in `slot`.
    pub fn content(slot: &str) -> Self {
        Self(alloc::format!("content:{slot}"))
    }

    /// Identifier for a registered action.
    pub fn action(id: &str) -> Self {
        Self(alloc::format!("action:{id}"))
    }

    /// Identifier for a custom item living in `slot`.
    pub fn custom(slot: &str) -> Self {
        Self(alloc::format!("item:{slot}"))
    }

    /// Identifier of the search affordance.
    pub fn search() -> Self {
        Self(String::from(Self::SEARCH))
    }

    /// Returns `true` if this is the search affordance.
    pub fn is_search(&self) -> bool {
        self.0 == Self::SEARCH
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ItemId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

bitflags::bitflags! {
    /// Per-item flags consulted by the overflow calculator.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Never auto-hidden; always rendered in the bar.
        const PROTECTED        = 0b0000_0001;
        /// When hidden, reappears as a selectable entry in the overflow popover.
        const IN_OVERFLOW_MENU = 0b0000_0010;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Which family of the bar an item came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemOrigin {
    /// Plain content; vanishes when hidden.
    Content,
    /// A registered action button.
    Action,
    /// A host-provided custom item.
    CustomItem,
    /// The search affordance (field or button).
    Search,
}

/// A bar region the overflow calculator may hide.
///
/// The locator is borrowed from the host's snapshot for the duration of one run;
/// the engine never keeps it across runs.
#[derive(Debug)]
pub struct HidableItem<'a, L> {
    /// Identifier, unique within a run.
    pub id: ItemId,
    /// Opaque handle the host resolves to a measurable, toggleable region.
    pub locator: &'a L,
    /// Lower hides first. Ties keep list order.
    pub hide_order: i32,
    /// Protection and overflow-menu flags.
    pub flags: ItemFlags,
    /// Family the item came from.
    pub origin: ItemOrigin,
    /// Left-to-right position in the bar; the overflow menu lists entries in this order.
    pub position: usize,
}

impl<L> Clone for HidableItem<'_, L> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            locator: self.locator,
            hide_order: self.hide_order,
            flags: self.flags,
            origin: self.origin,
            position: self.position,
        }
    }
}

impl<'a, L> HidableItem<'a, L> {
    /// Create an unprotected item that simply vanishes when hidden.
    pub fn new(id: impl Into<ItemId>, locator: &'a L, hide_order: i32) -> Self {
        Self {
            id: id.into(),
            locator,
            hide_order,
            flags: ItemFlags::empty(),
            origin: ItemOrigin::Content,
            position: 0,
        }
    }

    /// Mark the item protected.
    #[must_use]
    pub fn protect(mut self) -> Self {
        self.flags |= ItemFlags::PROTECTED;
        self
    }

    /// Mark the item as listed in the overflow menu once hidden.
    #[must_use]
    pub fn with_overflow_entry(mut self) -> Self {
        self.flags |= ItemFlags::IN_OVERFLOW_MENU;
        self
    }

    /// Set the origin family.
    #[must_use]
    pub fn with_origin(mut self, origin: ItemOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Set the bar position.
    #[must_use]
    pub fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Returns `true` if the item is never auto-hidden.
    pub fn is_protected(&self) -> bool {
        self.flags.contains(ItemFlags::PROTECTED)
    }

    /// Returns `true` if the item reappears in the overflow menu when hidden.
    pub fn shows_in_overflow_menu(&self) -> bool {
        self.flags.contains(ItemFlags::IN_OVERFLOW_MENU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_prefixes_keep_ids_apart() {
        assert_ne!(ItemId::content("a"), ItemId::custom("a"));
        assert_ne!(ItemId::content("a"), ItemId::action("a"));
        assert!(ItemId::search().is_search());
        assert!(!ItemId::action("search").is_search());
    }

    #[test]
    fn builder_methods_set_flags() {
        let loc = 7_u32;
        let item = HidableItem::new("x", &loc, 3).protect().with_overflow_entry();
        assert!(item.is_protected());
        assert!(item.shows_in_overflow_menu());
        assert_eq!(*item.locator, 7);
    }
}
