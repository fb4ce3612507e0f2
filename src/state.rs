use std::collections::HashMap;

use tracing::debug;

use crate::storage::{self, FlagStore};
use crate::tree;
use crate::types::MenuItem;

/// UI state of one sidebar instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarState {
    active_id: Option<String>,
    open_submenus: HashMap<String, bool>,
    collapsed: bool,
}

impl SidebarState {
    /// Fresh state with the collapsed flag read from `store`
    pub fn restore(store: &dyn FlagStore) -> Self {
        Self {
            collapsed: storage::load_collapsed(store),
            ..Self::default()
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_submenus.get(id).copied().unwrap_or(false)
    }

    pub fn open_submenus(&self) -> &HashMap<String, bool> {
        &self.open_submenus
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Align the state with the current location.
    ///
    /// The open-set is replaced by the ancestor chain of the matching item.
    /// When nothing matches, the open-set is emptied and the active id is
    /// kept. Returns whether an item matched.
    pub fn sync_location(&mut self, items: &[MenuItem], path: &str) -> bool {
        match tree::find_active_trail(items, path) {
            Some(trail) => {
                debug!(path, active = %trail.id, "sidebar location matched");
                self.open_submenus = trail.ancestors.into_iter().map(|id| (id, true)).collect();
                self.active_id = Some(trail.id);
                true
            }
            None => {
                debug!(path, "no sidebar entry for location");
                self.open_submenus.clear();
                false
            }
        }
    }

    /// Handle a click on `item`. Parents toggle open; leaves return the route
    /// to navigate to. Either way the item becomes active.
    pub fn activate(&mut self, item: &MenuItem) -> Option<String> {
        let target = if item.is_parent() {
            self.toggle_submenu(&item.id);
            None
        } else {
            item.route.clone()
        };
        self.active_id = Some(item.id.clone());
        target
    }

    pub fn toggle_submenu(&mut self, id: &str) {
        let open = self.open_submenus.entry(id.to_string()).or_insert(false);
        *open = !*open;
    }

    /// Flip the collapsed flag and persist it
    pub fn toggle_collapsed(&mut self, store: &dyn FlagStore) -> bool {
        self.set_collapsed(store, !self.collapsed);
        self.collapsed
    }

    pub fn set_collapsed(&mut self, store: &dyn FlagStore, collapsed: bool) {
        if self.collapsed != collapsed {
            self.collapsed = collapsed;
            storage::save_collapsed(store, collapsed);
        }
    }
}
