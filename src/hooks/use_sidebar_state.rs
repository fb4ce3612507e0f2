use dioxus::prelude::*;

use crate::state::SidebarState;
use crate::storage::SharedStore;
use crate::types::MenuItem;

/// Reactive sidebar state plus the collaborators its handlers need
#[derive(Clone)]
pub struct SidebarHandle {
    pub state: Signal<SidebarState>,
    pub store: SharedStore,
    pub on_navigate: EventHandler<String>,
}

/// Create the sidebar state for a component instance.
///
/// The collapsed flag is restored from `store` once; the active entry and
/// open submenus follow `current_path` on mount and on every change.
pub fn use_sidebar_state(
    items: &[MenuItem],
    current_path: &str,
    store: SharedStore,
    on_navigate: EventHandler<String>,
) -> SidebarHandle {
    let mut state = use_signal(|| {
        let mut initial = SidebarState::restore(store.as_store());
        initial.sync_location(items, current_path);
        initial
    });

    let path = current_path.to_string();
    let tree = items.to_vec();
    use_effect(use_reactive((&path, &tree), move |(path, tree)| {
        let mut next = state.peek().clone();
        next.sync_location(&tree, &path);
        if next != *state.peek() {
            state.set(next);
        }
    }));

    SidebarHandle {
        state,
        store,
        on_navigate,
    }
}

impl SidebarHandle {
    /// Click on a menu entry
    pub fn activate(&mut self, item: &MenuItem) {
        let target = self.state.write().activate(item);
        if let Some(route) = target {
            self.on_navigate.call(route);
        }
    }

    pub fn toggle_collapsed(&mut self) {
        self.state.write().toggle_collapsed(self.store.as_store());
    }
}
