use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    ChallanForm, Challans, Dashboard, EmailSettings, Login, Settings, TenantLayout, Terms,
    Unauthorized,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/unauthorized")]
    Unauthorized {},
    #[layout(TenantLayout)]
        #[route("/app")]
        AppHome {},
        #[route("/app/dashboard")]
        Dashboard {},
        #[route("/app/challans")]
        Challans {},
        #[route("/app/challan/new")]
        ChallanNew {},
        #[route("/app/challan/:challan_no/edit")]
        ChallanEdit { challan_no: String },
        #[route("/app/settings")]
        Settings {},
        #[route("/app/email-settings")]
        EmailSettings {},
        #[route("/app/terms")]
        Terms {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the login screen.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}

/// `/app` lands on the dashboard.
#[component]
fn AppHome() -> Element {
    rsx! {
        Dashboard {}
    }
}

#[component]
fn ChallanNew() -> Element {
    rsx! {
        ChallanForm { challan_no: None::<String> }
    }
}

#[component]
fn ChallanEdit(challan_no: String) -> Element {
    rsx! {
        ChallanForm { challan_no: Some(challan_no) }
    }
}

/// Unknown paths fall back to the login screen.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::warn!("unknown route: /{}", segments.join("/"));
    nav.replace(Route::Login {});
    rsx! {}
}
