//! Admin Sidebar - collapsible, hierarchical admin navigation for Dioxus
//!
//! Renders a nested menu from a static configuration tree, highlights the
//! entry matching the current route, opens the submenus leading to it, and
//! remembers whether the sidebar was collapsed.
//!
//! ## Example
//! ```rust
//! use admin_sidebar::prelude::*;
//!
//! let items = vec![MenuItem::group(
//!     "a",
//!     "A",
//!     vec![MenuItem::leaf("a1", "A1", "/a1")],
//! )];
//!
//! let store = MemoryStore::new();
//! let mut state = SidebarState::restore(&store);
//! state.sync_location(&items, "/a1");
//!
//! assert_eq!(state.active_id(), Some("a1"));
//! assert!(state.is_open("a"));
//! ```

pub mod app;
pub mod components;
pub mod error;
pub mod hooks;
pub mod i18n;
pub mod pages;
pub mod routes;
pub mod state;
pub mod storage;
pub mod tree;
pub mod types;
pub mod view_model;

pub use app::App;

pub mod prelude {
    pub use crate::components::layout::Sidebar;
    pub use crate::error::{SidebarError, SidebarResult};
    pub use crate::i18n::{I18n, Translate, Translator};
    pub use crate::state::SidebarState;
    pub use crate::storage::{FlagStore, MemoryStore, SharedStore, COLLAPSED_KEY};
    pub use crate::types::{MenuConfig, MenuItem};
}
