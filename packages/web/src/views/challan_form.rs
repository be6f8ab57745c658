//! Create/edit form with live document preview.
//!
//! Initialization runs two fetches concurrently — the branding template
//! and, in edit mode, the record itself — and renders nothing editable
//! until both settle. The template is a hard precondition for rendering:
//! a failed fetch falls back to the cached copy, and with neither the
//! form stays on the loader.

use dioxus::prelude::*;
use futures_util::future::join;

use api::challans::ImageUpload;
use api::{ApiClient, ChallanDraft, Warranty, ACCESSORY_OPTIONS};
use store::DesignTemplate;
use ui::{make_store, ChallanPreview, Loader, MessageBanner, StatusMessage};

use super::sleep_ms;
use crate::Route;

#[component]
pub fn ChallanForm(challan_no: Option<String>) -> Element {
    let edit_mode = challan_no.is_some();
    let mut draft = use_signal(ChallanDraft::default);
    let mut images = use_signal(Vec::<ImageUpload>::new);
    let mut msg = use_signal(|| Option::<StatusMessage>::None);
    let mut submitting = use_signal(|| false);
    let mut page_loading = use_signal(|| true);
    let mut template = use_signal(|| Option::<DesignTemplate>::None);
    let nav = use_navigator();

    let init_no = challan_no.clone();
    let _init = use_resource(move || {
        let challan_no = init_no.clone();
        async move {
            let store = make_store();
            let client = ApiClient::from_store(&store);

            let design = api::settings::design(&client);
            let record = async {
                match &challan_no {
                    Some(no) => Some(api::challans::get(&client, no).await),
                    None => None,
                }
            };
            let (design, record) = join(design, record).await;

            match design {
                Ok(Some(fresh)) => {
                    store::session::cache_design(&store, &fresh);
                    template.set(Some(fresh));
                }
                Ok(None) => {
                    if let Some(cached) = store::session::cached_design(&store) {
                        template.set(Some(cached));
                    }
                }
                Err(err) => {
                    // Stale cache beats no preview at all
                    tracing::warn!("design fetch failed: {err}");
                    if let Some(cached) = store::session::cached_design(&store) {
                        template.set(Some(cached));
                    }
                }
            }

            if let Some(result) = record {
                match result {
                    Ok(challan) => draft.set(challan.to_draft()),
                    Err(err) => {
                        tracing::error!("load challan: {err}");
                        msg.set(Some(StatusMessage::error("Failed to load page data")));
                    }
                }
            }

            page_loading.set(false);
        }
    });

    let submit_no = challan_no.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let challan_no = submit_no.clone();
        spawn(async move {
            submitting.set(true);
            msg.set(None);

            let client = ApiClient::from_store(&make_store());
            let result = match &challan_no {
                Some(no) => api::challans::update(&client, no, &draft(), images()).await,
                None => api::challans::create(&client, &draft(), images()).await,
            };

            match result {
                Ok(()) => {
                    let text = if challan_no.is_some() {
                        "Challan updated successfully"
                    } else {
                        "Challan created successfully"
                    };
                    msg.set(Some(StatusMessage::success(text)));
                    // Let the confirmation land before leaving the page
                    sleep_ms(1200).await;
                    nav.push(Route::Challans {});
                }
                Err(err) => {
                    tracing::error!("save challan: {err}");
                    msg.set(Some(StatusMessage::error("Save failed. Please try again.")));
                }
            }
            submitting.set(false);
        });
    };

    let handle_files = move |evt: FormEvent| async move {
        if let Some(engine) = evt.files() {
            let mut uploads = Vec::new();
            for file_name in engine.files() {
                if let Some(bytes) = engine.read_file(&file_name).await {
                    uploads.push(ImageUpload { file_name, bytes });
                }
            }
            images.set(uploads);
        }
    };

    // The preview cannot render without a template; keep blocking on the
    // loader until one is available
    if page_loading() || template().is_none() {
        let text = if edit_mode {
            "Loading challan...".to_string()
        } else {
            "Preparing form...".to_string()
        };
        return rsx! {
            Loader { text, fullscreen: true }
        };
    }
    let Some(current_template) = template() else {
        return rsx! {};
    };

    let preview_no = challan_no.clone().unwrap_or_else(|| "AUTO".to_string());
    let title = if edit_mode { "Edit Challan" } else { "Create Challan" };
    let image_count = images().len();

    rsx! {
        div { class: "challan-form-page",
            if submitting() {
                div { class: "overlay",
                    div { class: "spinner" }
                    div { class: "loader-text",
                        if edit_mode { "Updating challan..." } else { "Creating challan..." }
                    }
                }
            }

            h3 { "{title}" }
            if let Some(message) = msg() {
                MessageBanner { message }
            }

            div { class: "challan-form-layout",
                div { class: "challan-form-main",
                    form { onsubmit: handle_submit,
                        div { class: "card",
                            div { class: "form-field",
                                label { "M/s. (Customer)" }
                                input {
                                    value: draft().customer_name,
                                    required: true,
                                    disabled: submitting(),
                                    oninput: move |evt| draft.write().customer_name = evt.value(),
                                }
                            }

                            div { class: "form-field",
                                label { "Email" }
                                input {
                                    r#type: "email",
                                    placeholder: "example@mail.com",
                                    value: draft().email,
                                    required: true,
                                    disabled: submitting(),
                                    oninput: move |evt| draft.write().email = evt.value(),
                                }
                            }

                            div { class: "form-field",
                                label { "Contact Number" }
                                input {
                                    r#type: "number",
                                    value: draft().contact_number,
                                    required: true,
                                    disabled: submitting(),
                                    oninput: move |evt| draft.write().contact_number = evt.value(),
                                }
                            }

                            div { class: "form-field",
                                label { "City" }
                                input {
                                    placeholder: "Enter city",
                                    value: draft().city,
                                    required: true,
                                    disabled: submitting(),
                                    oninput: move |evt| draft.write().city = evt.value(),
                                }
                            }

                            div { class: "form-field",
                                label { "Serial Number" }
                                input {
                                    placeholder: "Enter Serial Number",
                                    value: draft().serial_number,
                                    required: true,
                                    disabled: submitting(),
                                    oninput: move |evt| draft.write().serial_number = evt.value(),
                                }
                            }

                            table { class: "items-table",
                                thead {
                                    tr {
                                        th { class: "items-no-col", "No." }
                                        th { "Description" }
                                        th { class: "items-qty-col", "Qty" }
                                    }
                                }
                                tbody {
                                    for (idx, row_no, item) in draft()
                                        .items
                                        .into_iter()
                                        .enumerate()
                                        .map(|(idx, item)| (idx, idx + 1, item))
                                    {
                                        tr { key: "{idx}",
                                            td { "{row_no}" }
                                            td {
                                                input {
                                                    placeholder: "Description",
                                                    value: item.description,
                                                    disabled: submitting(),
                                                    oninput: move |evt| {
                                                        draft.write().items[idx].description = evt.value();
                                                    },
                                                }
                                            }
                                            td {
                                                input {
                                                    r#type: "number",
                                                    min: 1,
                                                    value: "{item.quantity}",
                                                    disabled: submitting(),
                                                    oninput: move |evt| {
                                                        if let Ok(qty) = evt.value().parse::<u32>() {
                                                            if qty >= 1 {
                                                                draft.write().items[idx].quantity = qty;
                                                            }
                                                        }
                                                    },
                                                }
                                            }
                                        }
                                    }
                                }
                            }

                            button {
                                class: "btn btn-secondary btn-sm",
                                r#type: "button",
                                disabled: submitting(),
                                onclick: move |_| draft.write().add_item(),
                                "+ Add Row"
                            }

                            div { class: "form-field",
                                label { "Problem" }
                                textarea {
                                    rows: 3,
                                    placeholder: "Describe problem...",
                                    value: draft().problem,
                                    disabled: submitting(),
                                    oninput: move |evt| draft.write().problem = evt.value(),
                                }
                            }

                            div { class: "form-field",
                                label { "Upload Product Images" }
                                input {
                                    r#type: "file",
                                    multiple: true,
                                    accept: "image/*",
                                    disabled: submitting(),
                                    onchange: handle_files,
                                }
                                if image_count > 0 {
                                    div { class: "muted", "{image_count} image(s) selected" }
                                }
                            }
                        }

                        div { class: "card",
                            div { class: "form-field",
                                label { "Accessories" }
                                div { class: "check-grid",
                                    for accessory in ACCESSORY_OPTIONS {
                                        label { class: "check-inline",
                                            input {
                                                r#type: "checkbox",
                                                checked: draft().accessories.iter().any(|a| a == accessory),
                                                disabled: submitting(),
                                                onchange: move |_| draft.write().toggle_accessory(accessory),
                                            }
                                            "{accessory}"
                                        }
                                    }
                                }
                            }

                            div { class: "form-field",
                                label { "Warranty" }
                                div { class: "check-grid",
                                    for option in Warranty::ALL {
                                        label { class: "check-inline",
                                            input {
                                                r#type: "radio",
                                                name: "warranty",
                                                checked: draft().warranty == Some(option),
                                                disabled: submitting(),
                                                onchange: move |_| draft.write().warranty = Some(option),
                                            }
                                            {option.label()}
                                        }
                                    }
                                }
                            }

                            div { class: "form-field",
                                label { "Material Dispatch Through" }
                                input {
                                    placeholder: "Courier / Person",
                                    value: draft().dispatch_through,
                                    disabled: submitting(),
                                    oninput: move |evt| draft.write().dispatch_through = evt.value(),
                                }
                            }

                            div { class: "form-submit",
                                button {
                                    class: "btn btn-primary",
                                    r#type: "submit",
                                    disabled: submitting(),
                                    if submitting() {
                                        if edit_mode { "Updating..." } else { "Creating..." }
                                    } else {
                                        if edit_mode { "Update Challan" } else { "Create Challan" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "challan-form-preview",
                    h5 { "Live Preview" }
                    ChallanPreview {
                        template: current_template,
                        data: draft(),
                        challan_no: preview_no,
                    }
                }
            }
        }
    }
}
