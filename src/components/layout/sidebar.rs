use dioxus::prelude::*;

use crate::components::navigation::MenuList;
use crate::hooks::use_sidebar_state;
use crate::i18n::Translator;
use crate::storage::SharedStore;
use crate::types::MenuItem;
use crate::view_model::{sidebar_class, toggle_glyph, toggle_label_key};

/// Collapsible admin navigation.
///
/// `current_path` is the router location and `on_navigate` receives the
/// route of a clicked leaf. The collapsed flag is stored through the
/// `SharedStore` in context (platform default otherwise); labels go through
/// the `Translator` in context (keys shown as-is otherwise).
#[component]
pub fn Sidebar(items: Vec<MenuItem>, current_path: String, on_navigate: EventHandler<String>) -> Element {
    let store = use_hook(|| try_consume_context::<SharedStore>().unwrap_or_else(SharedStore::platform));
    let translator = use_hook(|| try_consume_context::<Translator>().unwrap_or_else(Translator::passthrough));
    let handle = use_sidebar_state(&items, &current_path, store, on_navigate);
    use_context_provider(|| handle.clone());
    use_context_provider(|| translator.clone());

    let state = handle.state.read().clone();
    let toggle_label = translator.tr(toggle_label_key(&state));
    let mut toggle = handle.clone();

    rsx! {
        aside {
            class: sidebar_class(&state),

            div { class: "sidebar-header",
                if !state.is_collapsed() {
                    h1 { class: "sidebar-title", {translator.tr("sidebar-title")} }
                }
                button {
                    r#type: "button",
                    class: "collapse-btn",
                    "aria-label": "{toggle_label}",
                    title: "{toggle_label}",
                    onclick: move |_| toggle.toggle_collapsed(),
                    {toggle_glyph(&state)}
                }
            }

            nav {
                class: "sidebar-nav",
                "aria-label": translator.tr("sidebar-navigation"),
                MenuList { items: items.clone(), level: 0 }
            }
        }
    }
}
