use dioxus::prelude::*;

use api::{ApiClient, DashboardStats};
use ui::{make_store, Loader};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let mut stats = use_signal(DashboardStats::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    let _loader = use_resource(move || async move {
        let client = ApiClient::from_store(&make_store());
        match api::challans::dashboard(&client).await {
            Ok(fresh) => stats.set(fresh),
            Err(err) => {
                tracing::error!("dashboard stats: {err}");
                error.set(Some(
                    "Failed to load dashboard data. Please try again later.".to_string(),
                ));
            }
        }
        loading.set(false);
    });

    if loading() {
        return rsx! {
            Loader { text: "Loading Dashboard..." }
        };
    }

    rsx! {
        div { class: "dashboard-page",
            h3 { "Dashboard" }

            if let Some(err) = error() {
                div { class: "banner banner-danger", "{err}" }
            }

            div { class: "stat-row",
                div { class: "card stat-card",
                    h5 { "Total Challans" }
                    div { class: "stat-value", "{stats().total}" }
                }
                div { class: "card stat-card",
                    h5 { "Pending" }
                    div { class: "stat-value stat-pending", "{stats().pending}" }
                }
                div { class: "card stat-card",
                    h5 { "Delivered" }
                    div { class: "stat-value stat-delivered", "{stats().delivered}" }
                }
            }

            div { class: "dashboard-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| { nav.push(Route::ChallanNew {}); },
                    "+ Create New Challan"
                }
            }
        }
    }
}
