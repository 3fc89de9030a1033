// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overflow menu projection: which hidden items the popover lists, and in what order.

use alloc::vec::Vec;

use crate::item::{HidableItem, ItemId, ItemOrigin};
use crate::overflow::OverflowResult;

/// Where an overflow menu entry came from, so the host can render it distinctly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuOrigin {
    /// A registered action (the search affordance counts as one).
    Action,
    /// A host-provided custom item.
    CustomItem,
}

/// One selectable popover entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverflowMenuEntry {
    /// Id of the hidden item.
    pub id: ItemId,
    /// Family of the hidden item.
    pub origin: MenuOrigin,
    /// Position of the item in the bar.
    pub position: usize,
}

/// Read-only view of the overflow popover content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverflowMenu {
    entries: Vec<OverflowMenuEntry>,
}

impl OverflowMenu {
    /// Project the hidden items of `result` that belong in the popover, in bar order.
    ///
    /// Content items never appear. Ids in `result` that are not in `items` are ignored.
    pub fn project<L>(items: &[HidableItem<'_, L>], result: &OverflowResult) -> Self {
        let mut entries: Vec<OverflowMenuEntry> = items
            .iter()
            .filter(|item| item.shows_in_overflow_menu() && result.is_hidden(&item.id))
            .filter_map(|item| {
                let origin = match item.origin {
                    ItemOrigin::Action | ItemOrigin::Search => MenuOrigin::Action,
                    ItemOrigin::CustomItem => MenuOrigin::CustomItem,
                    ItemOrigin::Content => return None,
                };
                Some(OverflowMenuEntry {
                    id: item.id.clone(),
                    origin,
                    position: item.position,
                })
            })
            .collect();
        entries.sort_by_key(|e| e.position);
        Self { entries }
    }

    /// Entries in bar order.
    pub fn entries(&self) -> &[OverflowMenuEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the popover has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `id` is listed.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.entries.iter().any(|e| e.id == *id)
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> core::slice::Iter<'_, OverflowMenuEntry> {
        self.entries.iter()
    }
}

impl<'m> IntoIterator for &'m OverflowMenu {
    type Item = &'m OverflowMenuEntry;
    type IntoIter = core::slice::Iter<'m, OverflowMenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn lists_hidden_menu_items_in_bar_order() {
        let l = 0_u8;
        let items = [
            HidableItem::new(ItemId::content("title"), &l, 5).at(0),
            HidableItem::new(ItemId::search(), &l, 4)
                .with_origin(ItemOrigin::Search)
                .with_overflow_entry()
                .at(1),
            HidableItem::new(ItemId::custom("share"), &l, 0)
                .with_origin(ItemOrigin::CustomItem)
                .with_overflow_entry()
                .at(2),
            HidableItem::new(ItemId::action("bell"), &l, 1)
                .with_origin(ItemOrigin::Action)
                .with_overflow_entry()
                .at(3),
        ];
        // Hidden in priority order, listed in bar order.
        let result = OverflowResult {
            hidden_ids: vec![
                ItemId::custom("share"),
                ItemId::action("bell"),
                ItemId::search(),
                ItemId::content("title"),
            ],
            show_overflow_indicator: true,
            measurement: None,
        };
        let menu = OverflowMenu::project(&items, &result);
        let listed: Vec<_> = menu.iter().map(|e| (e.id.as_str(), e.origin)).collect();
        assert_eq!(
            listed,
            [
                ("search", MenuOrigin::Action),
                ("item:share", MenuOrigin::CustomItem),
                ("action:bell", MenuOrigin::Action),
            ]
        );
        assert!(!menu.contains(&ItemId::content("title")));
        assert_eq!(menu.len(), 3);
    }

    #[test]
    fn nothing_hidden_means_empty_menu() {
        let l = 0_u8;
        let items = [HidableItem::new(ItemId::action("bell"), &l, 0)
            .with_origin(ItemOrigin::Action)
            .with_overflow_entry()];
        let menu = OverflowMenu::project(&items, &OverflowResult::empty());
        assert!(menu.is_empty());
    }
}
