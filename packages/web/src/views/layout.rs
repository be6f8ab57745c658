//! Shell for the protected `/app` subtree: sidebar navigation plus the
//! routed content area.

use dioxus::prelude::*;

use store::{Role, SessionStore};
use ui::{make_store, use_session};

use super::Guard;
use crate::Route;

#[component]
pub fn TenantLayout() -> Element {
    rsx! {
        Guard {
            allowed: vec![Role::TenantAdmin, Role::TenantStaff],
            LayoutShell {}
        }
    }
}

#[component]
fn LayoutShell() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let (tenant_name, is_admin) = match session() {
        Some(s) => (s.tenant.name, s.user.role == Role::TenantAdmin),
        None => (String::new(), false),
    };
    let initial = tenant_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "T".to_string());

    let logout = move |_| {
        make_store().clear();
        session.set(None);
        nav.replace(Route::Login {});
    };

    rsx! {
        div { class: "tenant-layout",
            aside { class: "tenant-sidebar",
                div {
                    div { class: "tenant-header",
                        div { class: "tenant-logo", "{initial}" }
                        h5 { class: "tenant-name", "{tenant_name}" }
                    }

                    nav { class: "tenant-nav",
                        Link { class: "tenant-link", to: Route::Dashboard {}, "Dashboard" }
                        Link { class: "tenant-link", to: Route::Challans {}, "Challans" }
                        Link { class: "tenant-link", to: Route::ChallanNew {}, "New Challan" }

                        if is_admin {
                            Link { class: "tenant-link", to: Route::Settings {}, "Design Settings" }
                            Link { class: "tenant-link", to: Route::EmailSettings {}, "Email Settings" }
                            Link { class: "tenant-link", to: Route::Terms {}, "Terms & Conditions" }
                        }
                    }
                }

                div { class: "tenant-footer",
                    button { class: "logout-btn", onclick: logout, "Logout" }
                }
            }

            main { class: "tenant-content",
                Outlet::<Route> {}
            }
        }
    }
}
