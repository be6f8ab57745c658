//! Session context and hooks for the UI.
//!
//! One signal holds the authenticated session for the whole app. It is
//! hydrated synchronously from the platform store on mount (localStorage
//! reads are synchronous), written on login, and cleared on logout or when
//! the guard detects an invalid token. Components never touch the backing
//! store ad hoc — they go through this context or [`make_store`].

use dioxus::prelude::*;

use store::{Session, SessionStore};

/// Construct the platform session store: browser localStorage on web, an
/// in-memory store elsewhere (tests, native tooling).
pub fn make_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

/// The current session. Updates when the user logs in or out.
pub fn use_session() -> Signal<Option<Session>> {
    use_context::<Signal<Option<Session>>>()
}

/// Provider component that owns the session signal.
/// Wrap the router with this so every view can call [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| Session::load(&make_store()));
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
