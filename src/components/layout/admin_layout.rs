use std::str::FromStr;

use dioxus::prelude::*;
use tracing::error;

use crate::components::layout::Sidebar;
use crate::routes::Route;
use crate::types::MenuConfig;

/// Shell around every page: the sidebar wired to the router, then the page.
#[component]
pub fn AdminLayout() -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let menu = use_context::<MenuConfig>();

    rsx! {
        div { class: "admin-shell",
            Sidebar {
                items: menu.items.clone(),
                current_path: route.to_string(),
                on_navigate: move |path: String| match Route::from_str(&path) {
                    Ok(target) => {
                        navigator.push(target);
                    }
                    Err(e) => error!("Cannot navigate to {}: {}", path, e),
                },
            }
            main { class: "admin-content",
                Outlet::<Route> {}
            }
        }
    }
}
