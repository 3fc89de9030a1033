// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied snapshot of the bar's item families.

use alloc::string::String;
use alloc::vec::Vec;

/// A content item (plain region between branding and search).
#[derive(Clone, Debug)]
pub struct ContentItem<L> {
    /// Slot identifier, stable across reorders.
    pub slot: String,
    /// Host handle for the region.
    pub locator: L,
}

/// A host-provided custom item shown among the actions.
#[derive(Clone, Debug)]
pub struct CustomItem<L> {
    /// Slot identifier, stable across reorders.
    pub slot: String,
    /// Host handle for the region.
    pub locator: L,
}

/// Role of a registered action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionRole {
    /// Notifications button.
    Notifications,
    /// Assistant or co-pilot button.
    Assistant,
    /// User profile; always protected.
    Profile,
    /// Product switch; always protected.
    ProductSwitch,
    /// Any other registered action.
    Other,
}

impl ActionRole {
    /// Returns `true` for the regions that are never auto-hidden.
    pub const fn is_always_protected(self) -> bool {
        matches!(self, Self::Profile | Self::ProductSwitch)
    }
}

/// Configuration of a registered action.
#[derive(Clone, Debug)]
pub struct ActionConfig<L> {
    /// Action identifier.
    pub id: String,
    /// Role of the action.
    pub role: ActionRole,
    /// Host handle for the region.
    pub locator: L,
    /// Never auto-hide this action.
    pub protected: bool,
    /// Whether the action is currently part of the bar.
    pub enabled: bool,
}

impl<L> ActionConfig<L> {
    /// An enabled, unprotected action.
    pub fn new(id: impl Into<String>, role: ActionRole, locator: L) -> Self {
        Self {
            id: id.into(),
            role,
            locator,
            protected: false,
            enabled: true,
        }
    }
}

/// Focus and content of the search field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFieldStatus {
    /// The field has keyboard focus.
    pub focused: bool,
    /// The field holds a typed value.
    pub has_value: bool,
}

/// The search affordance.
#[derive(Clone, Debug)]
pub struct SearchSlot<L> {
    /// Handle for the field region.
    pub field: L,
    /// Handle for the separate search button of legacy fields.
    pub button: Option<L>,
    /// Focus and typed-value status.
    pub status: SearchFieldStatus,
}

/// Read-only view of everything that may be hidden in one run.
///
/// Families are listed in bar order: content items, then the search slot, then
/// custom items, then actions.
#[derive(Clone, Debug)]
pub struct BarSnapshot<L> {
    /// Content items, left to right.
    pub content: Vec<ContentItem<L>>,
    /// Registered actions, left to right.
    pub actions: Vec<ActionConfig<L>>,
    /// Custom items, left to right.
    pub custom_items: Vec<CustomItem<L>>,
    /// The search affordance, if the bar has one.
    pub search: Option<SearchSlot<L>>,
}

impl<L> Default for BarSnapshot<L> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            actions: Vec::new(),
            custom_items: Vec::new(),
            search: None,
        }
    }
}

impl<L> BarSnapshot<L> {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a content item.
    #[must_use]
    pub fn with_content(mut self, slot: impl Into<String>, locator: L) -> Self {
        self.content.push(ContentItem {
            slot: slot.into(),
            locator,
        });
        self
    }

    /// Append a registered action.
    #[must_use]
    pub fn with_action(mut self, action: ActionConfig<L>) -> Self {
        self.actions.push(action);
        self
    }

    /// Append a custom item.
    #[must_use]
    pub fn with_custom_item(mut self, slot: impl Into<String>, locator: L) -> Self {
        self.custom_items.push(CustomItem {
            slot: slot.into(),
            locator,
        });
        self
    }

    /// Set the search affordance.
    #[must_use]
    pub fn with_search(mut self, field: L, button: Option<L>) -> Self {
        self.search = Some(SearchSlot {
            field,
            button,
            status: SearchFieldStatus::default(),
        });
        self
    }

    /// Focus and value status of the search field; idle when there is none.
    pub fn search_status(&self) -> SearchFieldStatus {
        self.search.as_ref().map(|s| s.status).unwrap_or_default()
    }
}
