//! Branding design settings with a live preview.

use dioxus::prelude::*;

use api::models::SettingsBlob;
use api::{ApiClient, ChallanDraft, Role};
use store::session::SETTINGS_KEY;
use store::DesignTemplate;
use ui::{make_store, ChallanPreview, Loader, MessageBanner, StatusMessage};

use super::Guard;

#[component]
pub fn Settings() -> Element {
    rsx! {
        Guard {
            allowed: vec![Role::TenantAdmin],
            SettingsInner {}
        }
    }
}

/// Sample data rendered into the preview so a design can be judged
/// without real challan input. No items, so the item table stays hidden.
fn sample_data() -> ChallanDraft {
    ChallanDraft {
        customer_name: "John Doe".to_string(),
        serial_number: "SN-12345".to_string(),
        problem: "No Power".to_string(),
        accessories: vec!["Charger".to_string(), "Adapter".to_string()],
        items: Vec::new(),
        ..ChallanDraft::default()
    }
}

#[component]
fn SettingsInner() -> Element {
    let mut template = use_signal(DesignTemplate::default);
    let mut loading = use_signal(|| true);
    let mut busy = use_signal(|| false);
    let mut msg = use_signal(|| Option::<StatusMessage>::None);

    let _loader = use_resource(move || async move {
        let store = make_store();
        let client = ApiClient::from_store(&store);
        match api::settings::settings(&client).await {
            Ok(blob) => {
                store::session::set_json(&store, SETTINGS_KEY, &blob);
                if let Some(branding) = blob.branding {
                    template.set(branding);
                }
            }
            Err(err) => {
                tracing::warn!("no settings saved yet: {err}");
            }
        }
        loading.set(false);
    });

    let handle_logo_upload = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(file_name) = engine.files().into_iter().next() else {
            return;
        };
        let Some(bytes) = engine.read_file(&file_name).await else {
            return;
        };

        busy.set(true);
        let client = ApiClient::from_store(&make_store());
        match api::settings::upload_logo(&client, file_name, bytes).await {
            Ok(Some(logo_url)) => {
                template.write().logo_url = logo_url;
                msg.set(Some(StatusMessage::success("Logo uploaded successfully")));
            }
            Ok(None) => {
                msg.set(Some(StatusMessage::error("Logo upload failed")));
            }
            Err(err) => {
                tracing::error!("logo upload: {err}");
                msg.set(Some(StatusMessage::error("Logo upload failed")));
            }
        }
        busy.set(false);
    };

    let handle_save = move |_| {
        spawn(async move {
            busy.set(true);
            let store = make_store();
            let client = ApiClient::from_store(&store);
            match api::settings::save_settings(&client, &template()).await {
                Ok(()) => {
                    let blob = SettingsBlob {
                        branding: Some(template()),
                        ..SettingsBlob::default()
                    };
                    store::session::set_json(&store, SETTINGS_KEY, &blob);
                    store::session::cache_design(&store, &template());
                    msg.set(Some(StatusMessage::success("Settings saved successfully")));
                }
                Err(err) => {
                    tracing::error!("save settings: {err}");
                    msg.set(Some(StatusMessage::error("Save failed")));
                }
            }
            busy.set(false);
        });
    };

    if loading() {
        return rsx! {
            Loader { text: "Loading settings...", fullscreen: true }
        };
    }

    let company_email = template().company_email;
    let email_display = if company_email.is_empty() {
        "Not Available".to_string()
    } else {
        company_email
    };

    rsx! {
        div { class: "settings-page",
            if busy() {
                div { class: "overlay",
                    div { class: "spinner" }
                    div { class: "loader-text", "Processing..." }
                }
            }

            h3 { "Challan Design Settings" }
            if let Some(message) = msg() {
                MessageBanner { message }
            }

            div { class: "settings-layout",
                div { class: "settings-form",
                    div { class: "form-field",
                        label { "Company Name" }
                        input {
                            value: template().company_name,
                            oninput: move |evt| template.write().company_name = evt.value(),
                        }
                    }

                    div { class: "form-field",
                        label { "Tagline" }
                        input {
                            value: template().tagline,
                            oninput: move |evt| template.write().tagline = evt.value(),
                        }
                    }

                    div { class: "form-field",
                        label { "Address" }
                        textarea {
                            rows: 2,
                            value: template().company_address,
                            oninput: move |evt| template.write().company_address = evt.value(),
                        }
                    }

                    div { class: "form-field",
                        label { "Contact Number" }
                        input {
                            value: template().company_phone,
                            oninput: move |evt| template.write().company_phone = evt.value(),
                        }
                    }

                    div { class: "form-field",
                        label { "Registered Email (Read Only)" }
                        input { r#type: "email", value: email_display, disabled: true }
                    }

                    div { class: "form-field",
                        label { "Upload Logo" }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            disabled: busy(),
                            onchange: handle_logo_upload,
                        }
                        if !template().logo_url.is_empty() {
                            img {
                                class: "logo-thumb",
                                src: template().logo_url,
                                alt: "Logo",
                            }
                        }
                    }

                    div { class: "form-field",
                        label { "Theme Color" }
                        input {
                            r#type: "color",
                            value: template().theme_color,
                            oninput: move |evt| template.write().theme_color = evt.value(),
                        }
                    }

                    div { class: "form-field",
                        label { "Font Family" }
                        input {
                            value: template().font_family,
                            oninput: move |evt| template.write().font_family = evt.value(),
                        }
                    }

                    label { class: "check-inline",
                        input {
                            r#type: "checkbox",
                            checked: template().show_accessories,
                            onchange: move |evt| template.write().show_accessories = evt.checked(),
                        }
                        "Show Accessories"
                    }

                    div { class: "form-field",
                        label { "Footer Note" }
                        input {
                            value: template().footer_note,
                            oninput: move |evt| template.write().footer_note = evt.value(),
                        }
                    }

                    button {
                        class: "btn btn-primary",
                        disabled: busy(),
                        onclick: handle_save,
                        "Save Design"
                    }
                }

                div { class: "settings-preview",
                    h5 { "Live Preview" }
                    ChallanPreview {
                        template: template(),
                        data: sample_data(),
                    }
                }
            }
        }
    }
}
