//! Depth-first queries over the menu tree.

use crate::types::MenuItem;

/// The item whose route matched a location, plus the ids of the submenus
/// enclosing it (outermost first).
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTrail {
    pub id: String,
    pub ancestors: Vec<String>,
}

/// Pre-order search for the first item whose route equals `path`.
/// An item's own route is checked before its children.
pub fn find_active_trail(items: &[MenuItem], path: &str) -> Option<ActiveTrail> {
    let mut ancestors = Vec::new();
    search(items, path, &mut ancestors).map(|item| ActiveTrail {
        id: item.id.clone(),
        ancestors: ancestors.into_iter().map(str::to_string).collect(),
    })
}

fn search<'a>(items: &'a [MenuItem], path: &str, ancestors: &mut Vec<&'a str>) -> Option<&'a MenuItem> {
    for item in items {
        if item.route.as_deref() == Some(path) {
            return Some(item);
        }
        if let Some(children) = &item.sub_items {
            ancestors.push(&item.id);
            if let Some(found) = search(children, path, ancestors) {
                return Some(found);
            }
            ancestors.pop();
        }
    }
    None
}

/// First item with the given id, anywhere in the tree
pub fn find_item<'a>(items: &'a [MenuItem], id: &str) -> Option<&'a MenuItem> {
    walk(items).map(|(item, _)| item).find(|item| item.id == id)
}

/// Depth-first iterator yielding each item with its nesting depth (roots are 0).
pub fn walk(items: &[MenuItem]) -> Walk<'_> {
    Walk {
        stack: items.iter().rev().map(|item| (item, 0)).collect(),
    }
}

pub struct Walk<'a> {
    stack: Vec<(&'a MenuItem, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a MenuItem, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (item, depth) = self.stack.pop()?;
        self.stack
            .extend(item.children().iter().rev().map(|child| (child, depth + 1)));
        Some((item, depth))
    }
}
