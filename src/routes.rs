use dioxus::prelude::*;

use crate::components::layout::AdminLayout;
use crate::pages::{AuditLog, NotFound, Overview, Roles, Settings, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AdminLayout)]
        #[route("/")]
        Overview {},
        #[route("/users")]
        Users {},
        #[route("/users/roles")]
        Roles {},
        #[route("/system/settings")]
        Settings {},
        #[route("/system/audit/log")]
        AuditLog {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
