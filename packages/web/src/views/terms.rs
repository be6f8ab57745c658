//! Terms and conditions text editor.

use dioxus::prelude::*;

use api::{ApiClient, Role};
use ui::{make_store, MessageBanner, StatusMessage};

use super::Guard;

#[component]
pub fn Terms() -> Element {
    rsx! {
        Guard {
            allowed: vec![Role::TenantAdmin],
            TermsInner {}
        }
    }
}

#[component]
fn TermsInner() -> Element {
    let mut terms = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut msg = use_signal(|| Option::<StatusMessage>::None);

    let _loader = use_resource(move || async move {
        let client = ApiClient::from_store(&make_store());
        match api::settings::terms(&client).await {
            Ok(text) => terms.set(text),
            Err(err) => {
                tracing::error!("load terms: {err}");
                msg.set(Some(StatusMessage::error("Failed to load Terms & Conditions.")));
            }
        }
        loading.set(false);
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            saving.set(true);
            msg.set(None);
            let client = ApiClient::from_store(&make_store());
            match api::settings::save_terms(&client, &terms()).await {
                Ok(()) => msg.set(Some(StatusMessage::success(
                    "Terms & Conditions saved successfully.",
                ))),
                Err(err) => {
                    tracing::error!("save terms: {err}");
                    msg.set(Some(StatusMessage::error("Failed to save Terms & Conditions.")));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "terms-page",
            h3 { "Terms & Conditions" }
            div { class: "card",
                if let Some(message) = msg() {
                    MessageBanner { message }
                }

                if loading() {
                    div { class: "loader",
                        div { class: "spinner" }
                        div { class: "loader-text", "Loading..." }
                    }
                } else {
                    form { onsubmit: handle_save,
                        div { class: "form-field",
                            label { "Terms & Conditions (HTML allowed)" }
                            textarea {
                                rows: 12,
                                placeholder: "Enter your shop's terms and conditions. Separate blocks with <br/>.",
                                value: terms(),
                                oninput: move |evt| terms.set(evt.value()),
                            }
                            p { class: "muted",
                                "Blocks separated by <br/> render as separate paragraphs on the challan PDF."
                            }
                        }

                        div { class: "form-submit",
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: saving(),
                                if saving() { "Saving..." } else { "Save Terms & Conditions" }
                            }
                        }
                    }
                }
            }
        }
    }
}
