// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Priority list builder: one ordered, de-duplicated candidate list per run.
//!
//! The builder flattens the host's families into [`HidableItem`]s in bar order and
//! assigns each a `hide_order` according to the active [`PriorityStrategy`]:
//!
//! | Strategy | Hidden first → hidden last |
//! |---|---|
//! | [`PriorityStrategy::CollapsedSearch`] | custom items, actions, content (right to left, except the first and the one next to search), content next to search, search affordance, first content item |
//! | [`PriorityStrategy::ExpandedSearch`] | content (right to left), custom items, actions, search field |
//!
//! Items hidden in the previous run move ahead of every other candidate so that,
//! absent a width change, the same items stay hidden. The open search field is
//! the exception: in the expanded strategy it keeps its last place.

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::config::SearchFieldKind;
use crate::item::{HidableItem, ItemId, ItemOrigin};
use crate::overflow::HiddenSet;
use crate::search::SearchState;
use crate::snapshot::BarSnapshot;

/// Offset applied to the rank of items that were hidden in the previous run.
const STICKY_SHIFT: i32 = 1 << 20;

/// Order in which candidates are hidden, chosen from the search state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PriorityStrategy {
    /// The search field is collapsed: actions go first, the search affordance late.
    CollapsedSearch,
    /// The search field is open: content goes first, the field survives longest.
    ExpandedSearch,
}

impl PriorityStrategy {
    /// Strategy for the given search state. Full-screen counts as expanded.
    pub const fn for_state(state: SearchState) -> Self {
        if state.is_expanded() {
            Self::ExpandedSearch
        } else {
            Self::CollapsedSearch
        }
    }
}

/// Build the candidate list for one run.
///
/// The returned items borrow their locators from `snapshot` and are listed in
/// bar order; the overflow calculator sorts them. Disabled actions are left
/// out. Profile and product-switch actions are always protected. Content items
/// vanish when hidden; everything else reappears in the overflow menu.
///
/// Duplicate ids keep the first occurrence.
pub fn build_priority_list<'a, L>(
    snapshot: &'a BarSnapshot<L>,
    search: SearchState,
    kind: SearchFieldKind,
    previously_hidden: &HiddenSet,
) -> Vec<HidableItem<'a, L>> {
    let strategy = PriorityStrategy::for_state(search);
    let mut list = Candidates::default();

    let content: Vec<usize> = snapshot
        .content
        .iter()
        .filter_map(|c| {
            list.push(HidableItem::new(ItemId::content(&c.slot), &c.locator, 0))
        })
        .collect();

    let search_idx = snapshot.search.as_ref().and_then(|slot| {
        let locator = match (kind, search.is_expanded(), &slot.button) {
            (SearchFieldKind::Legacy, false, Some(button)) => button,
            _ => &slot.field,
        };
        list.push(
            HidableItem::new(ItemId::search(), locator, 0)
                .with_origin(ItemOrigin::Search)
                .with_overflow_entry(),
        )
    });

    let mut actions: Vec<usize> = snapshot
        .custom_items
        .iter()
        .filter_map(|c| {
            list.push(
                HidableItem::new(ItemId::custom(&c.slot), &c.locator, 0)
                    .with_origin(ItemOrigin::CustomItem)
                    .with_overflow_entry(),
            )
        })
        .collect();

    for action in snapshot.actions.iter().filter(|a| a.enabled) {
        let mut item = HidableItem::new(ItemId::action(&action.id), &action.locator, i32::MAX)
            .with_origin(ItemOrigin::Action)
            .with_overflow_entry();
        let protected = action.protected || action.role.is_always_protected();
        if protected {
            item = item.protect();
        }
        if let Some(idx) = list.push(item)
            && !protected
        {
            actions.push(idx);
        }
    }

    let order = strategy_order(strategy, &content, &actions, search_idx);
    let mut items = list.items;
    for (rank, idx) in order.into_iter().enumerate() {
        let item = &mut items[idx];
        let mut hide_order = i32::try_from(rank).unwrap_or(i32::MAX - STICKY_SHIFT);
        let keeps_place =
            strategy == PriorityStrategy::ExpandedSearch && item.origin == ItemOrigin::Search;
        if !keeps_place && previously_hidden.contains(&item.id) {
            hide_order -= STICKY_SHIFT;
        }
        item.hide_order = hide_order;
    }

    tracing::trace!(
        ?strategy,
        candidates = items.len(),
        sticky = previously_hidden.len(),
        "built priority list"
    );
    items
}

/// Indices into the candidate list, from first hidden to last hidden.
fn strategy_order(
    strategy: PriorityStrategy,
    content: &[usize],
    actions: &[usize],
    search: Option<usize>,
) -> Vec<usize> {
    let mut order = Vec::with_capacity(content.len() + actions.len() + 1);
    match strategy {
        PriorityStrategy::CollapsedSearch => {
            order.extend_from_slice(actions);
            match content {
                [] => order.extend(search),
                [only] => {
                    order.extend(search);
                    order.push(*only);
                }
                [first, middle @ .., adjacent] => {
                    order.extend(middle.iter().rev());
                    order.push(*adjacent);
                    order.extend(search);
                    order.push(*first);
                }
            }
        }
        PriorityStrategy::ExpandedSearch => {
            order.extend(content.iter().rev());
            order.extend_from_slice(actions);
            order.extend(search);
        }
    }
    order
}

/// De-duplicating accumulator that assigns bar positions.
struct Candidates<'a, L> {
    items: Vec<HidableItem<'a, L>>,
    seen: HashSet<ItemId>,
}

impl<L> Default for Candidates<'_, L> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<'a, L> Candidates<'a, L> {
    fn push(&mut self, item: HidableItem<'a, L>) -> Option<usize> {
        if !self.seen.insert(item.id.clone()) {
            tracing::warn!(id = %item.id, "dropping duplicate bar item");
            return None;
        }
        let idx = self.items.len();
        self.items.push(item.at(idx));
        Some(idx)
    }
}
