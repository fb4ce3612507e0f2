//! Presentation values derived from `SidebarState`, kept out of the
//! components so they can be checked without a renderer.

use crate::state::SidebarState;
use crate::types::MenuItem;

/// Rendering of one menu entry
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView {
    pub active: bool,
    pub open: bool,
    pub show_text: bool,
    pub show_children: bool,
    pub aria_expanded: Option<&'static str>,
    pub aria_current: Option<&'static str>,
    pub indicator: Option<&'static str>,
}

impl EntryView {
    pub fn new(item: &MenuItem, state: &SidebarState) -> Self {
        let active = state.is_active(&item.id);
        let open = state.is_open(&item.id);
        let parent = item.is_parent();
        let show_text = !state.is_collapsed();

        Self {
            active,
            open,
            show_text,
            show_children: parent && open,
            aria_expanded: parent.then_some(if open { "true" } else { "false" }),
            aria_current: (active && item.route.is_some()).then_some("page"),
            indicator: (parent && show_text).then_some(if open { "▾" } else { "▸" }),
        }
    }

    pub fn item_class(&self) -> &'static str {
        if self.active {
            "menu-item active"
        } else {
            "menu-item"
        }
    }
}

pub fn sidebar_class(state: &SidebarState) -> &'static str {
    if state.is_collapsed() {
        "admin-sidebar collapsed"
    } else {
        "admin-sidebar"
    }
}

/// Translation key for the collapse button's label
pub fn toggle_label_key(state: &SidebarState) -> &'static str {
    if state.is_collapsed() {
        "sidebar-expand"
    } else {
        "sidebar-collapse"
    }
}

pub fn toggle_glyph(state: &SidebarState) -> &'static str {
    if state.is_collapsed() {
        "›"
    } else {
        "‹"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn parent() -> MenuItem {
        MenuItem::group("a", "A", vec![MenuItem::leaf("a1", "A1", "/a1")])
    }

    #[test]
    fn test_closed_parent() {
        let view = EntryView::new(&parent(), &SidebarState::default());
        assert_eq!(view.aria_expanded, Some("false"));
        assert_eq!(view.indicator, Some("▸"));
        assert!(!view.show_children);
        assert_eq!(view.aria_current, None);
    }

    #[test]
    fn test_active_leaf_is_current_page() {
        let mut state = SidebarState::default();
        state.sync_location(&[parent()], "/a1");
        let view = EntryView::new(&MenuItem::leaf("a1", "A1", "/a1"), &state);
        assert_eq!(view.aria_current, Some("page"));
        assert_eq!(view.aria_expanded, None);
        assert_eq!(view.item_class(), "menu-item active");

        let parent_view = EntryView::new(&parent(), &state);
        assert!(parent_view.show_children);
        assert_eq!(parent_view.indicator, Some("▾"));
    }

    #[test]
    fn test_active_parent_without_route_is_not_current_page() {
        let mut state = SidebarState::default();
        state.activate(&parent());
        let view = EntryView::new(&parent(), &state);
        assert!(view.active);
        assert_eq!(view.aria_current, None);
    }

    #[test]
    fn test_collapsed_hides_text_and_indicator() {
        let store = MemoryStore::new();
        let mut state = SidebarState::default();
        state.toggle_collapsed(&store);
        let view = EntryView::new(&parent(), &state);
        assert!(!view.show_text);
        assert_eq!(view.indicator, None);
        assert_eq!(sidebar_class(&state), "admin-sidebar collapsed");
        assert_eq!(toggle_label_key(&state), "sidebar-expand");
        assert_eq!(toggle_glyph(&state), "›");
    }
}
