//! SMTP configuration for challan delivery mail.

use dioxus::prelude::*;

use api::{ApiClient, Role};
use ui::{make_store, Loader, MessageBanner, StatusMessage};

use super::Guard;

#[component]
pub fn EmailSettings() -> Element {
    rsx! {
        Guard {
            allowed: vec![Role::TenantAdmin],
            EmailSettingsInner {}
        }
    }
}

#[component]
fn EmailSettingsInner() -> Element {
    let mut form = use_signal(api::EmailSettings::default);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut msg = use_signal(|| Option::<StatusMessage>::None);

    let _loader = use_resource(move || async move {
        let client = ApiClient::from_store(&make_store());
        match api::settings::email_settings(&client).await {
            Ok(Some(saved)) => form.set(saved),
            Ok(None) => {}
            Err(err) => {
                tracing::error!("load email settings: {err}");
                msg.set(Some(StatusMessage::error("Could not load email settings.")));
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
            match api::settings::save_email_settings(&client, &form()).await {
                Ok(()) => msg.set(Some(StatusMessage::success(
                    "Email settings saved successfully!",
                ))),
                Err(err) => {
                    tracing::error!("save email settings: {err}");
                    msg.set(Some(StatusMessage::error("Failed to save email settings.")));
                }
            }
            saving.set(false);
        });
    };

    if loading() {
        return rsx! {
            Loader { text: "Loading email settings...", fullscreen: true }
        };
    }

    rsx! {
        div { class: "email-settings-page",
            div { class: "card",
                h3 { "Challan Email Settings" }
                p { class: "muted",
                    "Configure your service center's SMTP details to send challan PDFs directly to customers."
                }

                if let Some(message) = msg() {
                    MessageBanner { message }
                }

                form { onsubmit: handle_save,
                    div { class: "settings-columns",
                        div {
                            div { class: "form-field",
                                label { "Sender Name" }
                                input {
                                    placeholder: "e.g. Phoenix Computers",
                                    value: form().sender_name,
                                    oninput: move |evt| form.write().sender_name = evt.value(),
                                }
                            }

                            div { class: "form-field",
                                label { "Sender Email" }
                                input {
                                    r#type: "email",
                                    placeholder: "e.g. yourcompany@gmail.com",
                                    value: form().sender_email,
                                    required: true,
                                    oninput: move |evt| form.write().sender_email = evt.value(),
                                }
                            }

                            div { class: "form-field",
                                label { "App Password" }
                                input {
                                    r#type: "password",
                                    placeholder: "Enter your app-specific password",
                                    value: form().sender_password,
                                    required: true,
                                    oninput: move |evt| form.write().sender_password = evt.value(),
                                }
                                p { class: "muted",
                                    "Use an app password, not your normal login password."
                                }
                            }
                        }

                        div {
                            div { class: "form-field",
                                label { "SMTP Server" }
                                input {
                                    placeholder: "e.g. smtp.gmail.com",
                                    value: form().smtp_server,
                                    required: true,
                                    oninput: move |evt| form.write().smtp_server = evt.value(),
                                }
                            }

                            div { class: "form-field",
                                label { "SMTP Port" }
                                input {
                                    r#type: "number",
                                    placeholder: "587",
                                    value: form().smtp_port,
                                    required: true,
                                    oninput: move |evt| form.write().smtp_port = evt.value(),
                                }
                            }

                            div { class: "form-field",
                                label { class: "check-inline",
                                    input {
                                        r#type: "checkbox",
                                        checked: form().use_tls,
                                        onchange: move |evt| form.write().use_tls = evt.checked(),
                                    }
                                    "Use TLS (STARTTLS)"
                                }
                                label { class: "check-inline",
                                    input {
                                        r#type: "checkbox",
                                        checked: form().use_ssl,
                                        onchange: move |evt| form.write().use_ssl = evt.checked(),
                                    }
                                    "Use SSL"
                                }
                            }
                        }
                    }

                    div { class: "form-submit",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save Settings" }
                        }
                    }
                }
            }
        }
    }
}
