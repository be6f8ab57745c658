use dioxus::prelude::*;

use crate::Route;

/// Landing page for valid sessions whose role does not cover the
/// requested view.
#[component]
pub fn Unauthorized() -> Element {
    rsx! {
        div { class: "unauthorized-page",
            h3 { "Access denied" }
            p { class: "muted",
                "Your account does not have permission to view this page."
            }
            Link { class: "btn btn-primary", to: Route::Challans {}, "Back to challans" }
        }
    }
}
