//! Route guard for the protected subtree.

use dioxus::prelude::*;

use store::{Role, SessionStore};
use ui::{evaluate_access, make_store, use_session, GuardOutcome};

use crate::Route;

/// Gate children behind a valid session and an allowed role set. An empty
/// set admits any authenticated user. An invalid session is cleared from
/// the store before redirecting so no half-valid session persists.
#[component]
pub fn Guard(#[props(default)] allowed: Vec<Role>, children: Element) -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    match evaluate_access(session().as_ref(), &allowed) {
        GuardOutcome::Allow => rsx! {
            {children}
        },
        GuardOutcome::RedirectLogin => {
            make_store().clear();
            if session.peek().is_some() {
                session.set(None);
            }
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardOutcome::RedirectUnauthorized => {
            nav.replace(Route::Unauthorized {});
            rsx! {}
        }
    }
}
