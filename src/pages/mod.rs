use dioxus::prelude::*;

use crate::i18n::Translator;

#[component]
fn PageHeader(title_key: &'static str) -> Element {
    let translator = use_context::<Translator>();

    rsx! {
        header { class: "page-header",
            h2 { class: "page-title", {translator.tr(title_key)} }
        }
    }
}

#[component]
pub fn Overview() -> Element {
    rsx! { PageHeader { title_key: "page-overview" } }
}

#[component]
pub fn Users() -> Element {
    rsx! { PageHeader { title_key: "page-users" } }
}

#[component]
pub fn Roles() -> Element {
    rsx! { PageHeader { title_key: "page-roles" } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { PageHeader { title_key: "page-settings" } }
}

#[component]
pub fn AuditLog() -> Element {
    rsx! { PageHeader { title_key: "page-audit-log" } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let translator = use_context::<Translator>();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        PageHeader { title_key: "page-not-found" }
        p { class: "page-hint", {translator.tr("page-not-found-hint")} }
        code { "{path}" }
    }
}
