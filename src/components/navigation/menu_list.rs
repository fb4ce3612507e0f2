use dioxus::prelude::*;

use crate::hooks::SidebarHandle;
use crate::i18n::Translator;
use crate::types::MenuItem;
use crate::view_model::EntryView;

/// One level of the menu tree; nests itself for open submenus.
///
/// Entries are keyed by position and id, so repeated ids among siblings
/// still produce distinct keys.
#[component]
pub fn MenuList(items: Vec<MenuItem>, level: usize) -> Element {
    rsx! {
        ul { class: "sidebar-menu level-{level}",
            for (index, item) in items.iter().enumerate() {
                MenuEntry { key: "{index}-{item.id}", item: item.clone(), level }
            }
        }
    }
}

#[component]
fn MenuEntry(item: MenuItem, level: usize) -> Element {
    let sidebar = use_context::<SidebarHandle>();
    let translator = use_context::<Translator>();

    let view = EntryView::new(&item, &sidebar.state.read());
    let label = translator.tr(&item.label);
    let children = item.children().to_vec();
    let icon = item.icon.clone();

    let mut handle = sidebar.clone();
    let clicked = item.clone();

    rsx! {
        li { class: view.item_class(),
            button {
                r#type: "button",
                class: "menu-link",
                title: (!view.show_text).then(|| label.clone()),
                "aria-expanded": view.aria_expanded,
                "aria-current": view.aria_current,
                onclick: move |_| handle.activate(&clicked),

                {icon.map(|icon| rsx! { span { class: "menu-icon", "{icon}" } })}
                if view.show_text {
                    span { class: "menu-text", "{label}" }
                }
                {view.indicator.map(|arrow| rsx! { span { class: "submenu-arrow", "{arrow}" } })}
            }
            if view.show_children {
                MenuList { items: children, level: level + 1 }
            }
        }
    }
}
