use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{SidebarError, SidebarResult};
use crate::tree;

/// One entry of the navigation tree.
///
/// An item with `sub_items` present (even an empty list) is a parent: it
/// opens and closes instead of navigating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    /// Translation key for the display label
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_items: Option<Vec<MenuItem>>,
}

impl MenuItem {
    /// A navigable leaf entry
    pub fn leaf(id: impl Into<String>, label: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            route: Some(route.into()),
            sub_items: None,
        }
    }

    /// A submenu holding `children`
    pub fn group(id: impl Into<String>, label: impl Into<String>, children: Vec<MenuItem>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            route: None,
            sub_items: Some(children),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn is_parent(&self) -> bool {
        self.sub_items.is_some()
    }

    pub fn children(&self) -> &[MenuItem] {
        self.sub_items.as_deref().unwrap_or(&[])
    }
}

/// Menu tree supplied by the embedding application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuConfig {
    pub items: Vec<MenuItem>,
}

impl MenuConfig {
    pub fn new(items: Vec<MenuItem>) -> SidebarResult<Self> {
        validate(&items)?;
        Ok(Self { items })
    }

    /// Parse a JSON array of menu items (`id`, `label`, `icon`, `route`, `subItems`).
    pub fn from_json(json: &str) -> SidebarResult<Self> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        Self::new(items)
    }
}

/// Presence checks on every item. Duplicate ids are tolerated but reported,
/// since lookups by id then resolve to the first match.
fn validate(items: &[MenuItem]) -> SidebarResult<()> {
    let mut seen = HashSet::new();
    for (item, depth) in tree::walk(items) {
        if item.id.trim().is_empty() {
            return Err(SidebarError::InvalidConfig(format!(
                "item with label '{}' at depth {} has an empty id",
                item.label, depth
            )));
        }
        if item.label.trim().is_empty() {
            return Err(SidebarError::InvalidConfig(format!(
                "item '{}' has an empty label",
                item.id
            )));
        }
        if !seen.insert(item.id.as_str()) {
            warn!(id = %item.id, "duplicate menu item id");
        }
    }
    Ok(())
}
