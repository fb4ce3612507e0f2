use dioxus::prelude::*;
use tracing::error;

use crate::i18n::{I18n, Translator};
use crate::routes::Route;
use crate::storage::SharedStore;
use crate::types::MenuConfig;

const MAIN_CSS: Asset = asset!("/assets/main.css");

static MENU_JSON: &str = include_str!("../assets/menu.json");

#[component]
pub fn App() -> Element {
    use_context_provider(|| Translator::new(I18n::new(browser_locale().as_deref())));
    use_context_provider(SharedStore::platform);
    use_context_provider(|| load_menu(MENU_JSON));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Parse a menu, falling back to an empty one so the shell still renders
pub fn load_menu(json: &str) -> MenuConfig {
    MenuConfig::from_json(json).unwrap_or_else(|e| {
        error!("Failed to load menu configuration: {}", e);
        MenuConfig::default()
    })
}

fn browser_locale() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.navigator().language())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::tree;

    #[test]
    fn test_bundled_menu_loads() {
        let menu = load_menu(MENU_JSON);
        assert!(!menu.items.is_empty());
    }

    #[test]
    fn test_bundled_menu_routes_resolve_to_pages() {
        let menu = load_menu(MENU_JSON);
        for (item, _) in tree::walk(&menu.items) {
            if let Some(path) = &item.route {
                let route = Route::from_str(path).unwrap();
                assert!(!matches!(route, Route::NotFound { .. }), "{} has no page", path);
                assert_eq!(&route.to_string(), path);
            }
        }
    }

    #[test]
    fn test_broken_menu_falls_back_to_empty() {
        assert_eq!(load_menu("not json"), MenuConfig::default());
    }
}
