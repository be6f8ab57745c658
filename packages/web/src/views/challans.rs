//! Challans list: load, filter, select, and mutate the collection.

use std::collections::HashSet;

use dioxus::prelude::*;

use api::filter::{parse_input_date, ChallanFilter};
use api::{ApiClient, Challan, Role};
use ui::{make_store, use_session, Loader, MessageBanner, StatusMessage};

use super::{confirm, open_in_new_tab};
use crate::Route;

/// Reload the collection from the server. Every load resets the selection;
/// any failure leaves an empty list rather than a stale one, with the
/// proxy-error case called out separately.
async fn fetch_challans(
    mut challans: Signal<Vec<Challan>>,
    mut filtered: Signal<Vec<Challan>>,
    mut selected: Signal<HashSet<String>>,
    mut select_all: Signal<bool>,
    mut msg: Signal<Option<StatusMessage>>,
) {
    let client = ApiClient::from_store(&make_store());
    match api::challans::list(&client).await {
        Ok(list) => {
            challans.set(list.clone());
            filtered.set(list);
        }
        Err(err) => {
            tracing::error!("fetch challans: {err}");
            let text = if err.is_gateway() {
                "Server returned an invalid response (proxy or gateway error)"
            } else {
                "Failed to fetch challans"
            };
            msg.set(Some(StatusMessage::error(text)));
            challans.set(Vec::new());
            filtered.set(Vec::new());
        }
    }
    selected.set(HashSet::new());
    select_all.set(false);
}

#[component]
pub fn Challans() -> Element {
    let challans = use_signal(Vec::<Challan>::new);
    let mut filtered = use_signal(Vec::<Challan>::new);
    let mut loading = use_signal(|| true);
    let mut processing = use_signal(|| false);
    let mut msg = use_signal(|| Option::<StatusMessage>::None);

    let mut selected = use_signal(HashSet::<String>::new);
    let mut select_all = use_signal(|| false);
    let mut confirm_bulk = use_signal(|| false);

    let mut from_date = use_signal(String::new);
    let mut to_date = use_signal(String::new);
    let mut status_filter = use_signal(|| "all".to_string());

    let mut qr_preview = use_signal(|| Option::<String>::None);
    let mut otp_modal = use_signal(|| false);
    let mut otp_value = use_signal(String::new);
    let mut otp_target = use_signal(|| Option::<Challan>::None);
    let mut verifying = use_signal(|| false);

    let session = use_session();
    let nav = use_navigator();

    // Both roles may bulk delete; the check still runs so a session with
    // no role can never reach the endpoint.
    let can_bulk_delete = matches!(
        session().map(|s| s.user.role),
        Some(Role::TenantAdmin) | Some(Role::TenantStaff)
    );

    let _initial = use_resource(move || async move {
        fetch_challans(challans, filtered, selected, select_all, msg).await;
        loading.set(false);
    });

    // Filters are a pure predicate over the last load; never a re-fetch
    let apply_filters = move |_| {
        let filter = ChallanFilter {
            from: parse_input_date(&from_date()),
            to: parse_input_date(&to_date()),
            status: status_filter(),
        };
        filtered.set(api::filter::apply(&challans(), &filter));
        selected.set(HashSet::new());
        select_all.set(false);
    };

    let reset_filters = move |_| {
        from_date.set(String::new());
        to_date.set(String::new());
        status_filter.set("all".to_string());
        filtered.set(challans());
        selected.set(HashSet::new());
        select_all.set(false);
    };

    let on_toggle = move |challan_no: String| {
        {
            let mut set = selected.write();
            if !set.remove(&challan_no) {
                set.insert(challan_no);
            }
        }
        select_all.set(false);
    };

    // Select-all covers the filtered view only, never the full collection
    let toggle_select_all = move |_| {
        if select_all() {
            selected.set(HashSet::new());
            select_all.set(false);
        } else {
            selected.set(filtered().iter().map(|c| c.challan_no.clone()).collect());
            select_all.set(true);
        }
    };

    let handle_bulk_delete = move |_| {
        spawn(async move {
            if !can_bulk_delete {
                msg.set(Some(StatusMessage::error(
                    "You don't have permission to perform bulk delete.",
                )));
                confirm_bulk.set(false);
                return;
            }
            let items: Vec<String> = selected().iter().cloned().collect();
            if items.is_empty() {
                msg.set(Some(StatusMessage::error("No challans selected for deletion.")));
                confirm_bulk.set(false);
                return;
            }

            processing.set(true);
            msg.set(None);
            let client = ApiClient::from_store(&make_store());
            let outcome = api::challans::bulk_delete(&client, items).await;
            if outcome.all_succeeded() {
                msg.set(Some(StatusMessage::success(outcome.summary())));
            } else {
                msg.set(Some(StatusMessage::error(outcome.summary())));
            }
            // Reload regardless of partial failure
            fetch_challans(challans, filtered, selected, select_all, msg).await;
            processing.set(false);
            confirm_bulk.set(false);
        });
    };

    let handle_delete = move |challan_no: String| {
        if !confirm("Delete this challan?") {
            return;
        }
        spawn(async move {
            processing.set(true);
            let client = ApiClient::from_store(&make_store());
            match api::challans::delete(&client, &challan_no).await {
                Ok(()) => {
                    msg.set(Some(StatusMessage::success("Challan deleted successfully")));
                    fetch_challans(challans, filtered, selected, select_all, msg).await;
                }
                Err(err) => {
                    tracing::error!("delete challan: {err}");
                    msg.set(Some(StatusMessage::error("Failed to delete challan")));
                }
            }
            processing.set(false);
        });
    };

    let handle_send_otp = move |challan_no: String| {
        if !confirm("Send OTP to the customer's email?") {
            return;
        }
        spawn(async move {
            processing.set(true);
            let client = ApiClient::from_store(&make_store());
            match api::challans::send_otp(&client, &challan_no).await {
                Ok(reply) => msg.set(Some(StatusMessage::success(reply.message))),
                Err(err) => {
                    tracing::error!("send otp: {err}");
                    msg.set(Some(StatusMessage::error("Failed to send OTP")));
                }
            }
            processing.set(false);
        });
    };

    let handle_open_verify = move |challan: Challan| {
        otp_target.set(Some(challan));
        otp_value.set(String::new());
        otp_modal.set(true);
    };

    let handle_verify_otp = move |_| {
        let Some(target) = otp_target() else {
            return;
        };
        if otp_value().trim().is_empty() {
            msg.set(Some(StatusMessage::error("Please enter the OTP")));
            return;
        }
        spawn(async move {
            verifying.set(true);
            let client = ApiClient::from_store(&make_store());
            match api::challans::verify_otp(&client, &target.challan_no, otp_value().trim()).await
            {
                Ok(reply) => {
                    msg.set(Some(StatusMessage::success(reply.message)));
                    otp_modal.set(false);
                    fetch_challans(challans, filtered, selected, select_all, msg).await;
                }
                Err(err) => {
                    tracing::error!("verify otp: {err}");
                    msg.set(Some(StatusMessage::error("Invalid or expired OTP")));
                }
            }
            verifying.set(false);
        });
    };

    let handle_resend_pdf = move |challan_no: String| {
        if !confirm("Resend the challan PDF to the customer's email?") {
            return;
        }
        spawn(async move {
            processing.set(true);
            let client = ApiClient::from_store(&make_store());
            match api::challans::resend_pdf(&client, &challan_no).await {
                Ok(()) => msg.set(Some(StatusMessage::success("PDF resent successfully!"))),
                Err(err) => {
                    tracing::error!("resend pdf: {err}");
                    msg.set(Some(StatusMessage::error("Failed to resend PDF")));
                }
            }
            processing.set(false);
        });
    };

    let handle_view_pdf = move |pdf_url: Option<String>| match pdf_url {
        Some(url) => open_in_new_tab(&api::asset_url(&url)),
        None => msg.set(Some(StatusMessage::error("PDF not available yet."))),
    };

    let handle_view_qr = move |qr_url: Option<String>| match qr_url {
        Some(url) => qr_preview.set(Some(api::asset_url(&url))),
        None => msg.set(Some(StatusMessage::error("QR code not available."))),
    };

    let handle_edit = move |challan_no: String| {
        nav.push(Route::ChallanEdit { challan_no });
    };

    if loading() {
        return rsx! {
            Loader { text: "Loading challans...", fullscreen: true }
        };
    }

    let selection_count = selected().len();
    let shown_count = filtered().len();

    rsx! {
        div { class: "challans-page",
            if processing() {
                div { class: "overlay",
                    div { class: "spinner" }
                    div { class: "loader-text", "Processing, please wait..." }
                }
            }

            h3 { "Challans" }
            if let Some(message) = msg() {
                MessageBanner { message }
            }

            // Filters
            div { class: "card filter-card",
                div { class: "filter-row",
                    div { class: "form-field",
                        label { "From Date" }
                        input {
                            r#type: "date",
                            value: from_date(),
                            oninput: move |evt| from_date.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "To Date" }
                        input {
                            r#type: "date",
                            value: to_date(),
                            oninput: move |evt| to_date.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Status" }
                        select {
                            value: status_filter(),
                            onchange: move |evt| status_filter.set(evt.value()),
                            option { value: "all", "All" }
                            option { value: "pending", "Pending" }
                            option { value: "delivered", "Delivered" }
                        }
                    }
                    div { class: "filter-actions",
                        button { class: "btn btn-primary", onclick: apply_filters, "Apply" }
                        button { class: "btn btn-secondary", onclick: reset_filters, "Reset" }
                    }
                }
            }

            // Create + bulk actions
            div { class: "actions-bar",
                div {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| { nav.push(Route::ChallanNew {}); },
                        "+ Create Challan"
                    }
                    if can_bulk_delete {
                        button {
                            class: "btn btn-danger",
                            disabled: selection_count == 0 || processing(),
                            onclick: move |_| confirm_bulk.set(true),
                            "Delete Selected ({selection_count})"
                        }
                    }
                }
                div { class: "muted", "{shown_count} challan(s)" }
            }

            table { class: "challans-table",
                thead {
                    tr {
                        th { class: "check-col",
                            input {
                                r#type: "checkbox",
                                checked: select_all(),
                                onchange: toggle_select_all,
                            }
                        }
                        th { "#" }
                        th { "Challan No" }
                        th { "Customer" }
                        th { "Serial No" }
                        th { "Problem" }
                        th { "Status" }
                        th { "Date" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if filtered().is_empty() {
                        tr {
                            td { colspan: 9, class: "empty-row",
                                "No challans found for the selected filters."
                            }
                        }
                    } else {
                        for (index, challan) in filtered().into_iter().enumerate() {
                            ChallanRow {
                                key: "{challan.challan_no}",
                                index: index + 1,
                                checked: selected().contains(&challan.challan_no),
                                challan,
                                on_toggle,
                                on_view_pdf: handle_view_pdf,
                                on_view_qr: handle_view_qr,
                                on_edit: handle_edit,
                                on_send_otp: handle_send_otp,
                                on_verify: handle_open_verify,
                                on_resend: handle_resend_pdf,
                                on_delete: handle_delete,
                            }
                        }
                    }
                }
            }

            // QR modal
            if let Some(qr_url) = qr_preview() {
                div { class: "modal-backdrop", onclick: move |_| qr_preview.set(None),
                    div {
                        class: "modal",
                        onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                        h5 { "QR Code" }
                        img { class: "qr-image", src: "{qr_url}", alt: "Challan QR Code" }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| qr_preview.set(None),
                                "Close"
                            }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    if let Some(url) = qr_preview() {
                                        open_in_new_tab(&url);
                                    }
                                },
                                "Print QR"
                            }
                        }
                    }
                }
            }

            // OTP modal
            if otp_modal() {
                div { class: "modal-backdrop", onclick: move |_| otp_modal.set(false),
                    div {
                        class: "modal",
                        onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                        h5 { "Verify OTP" }
                        div { class: "form-field",
                            label { "Enter OTP sent to customer email" }
                            input {
                                r#type: "text",
                                maxlength: 6,
                                placeholder: "6-digit code",
                                value: otp_value(),
                                oninput: move |evt| otp_value.set(evt.value()),
                            }
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-primary",
                                disabled: verifying(),
                                onclick: handle_verify_otp,
                                if verifying() { "Verifying..." } else { "Verify & Deliver" }
                            }
                        }
                    }
                }
            }

            // Bulk delete confirmation
            if confirm_bulk() {
                div { class: "modal-backdrop", onclick: move |_| confirm_bulk.set(false),
                    div {
                        class: "modal",
                        onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                        h5 { "Confirm Bulk Delete" }
                        p {
                            "Are you sure you want to delete "
                            strong { "{selection_count}" }
                            " challan(s)? This action cannot be undone."
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| confirm_bulk.set(false),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-danger",
                                disabled: processing(),
                                onclick: handle_bulk_delete,
                                if processing() { "Deleting..." } else { "Delete" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChallanRow(
    challan: Challan,
    index: usize,
    checked: bool,
    on_toggle: EventHandler<String>,
    on_view_pdf: EventHandler<Option<String>>,
    on_view_qr: EventHandler<Option<String>>,
    on_edit: EventHandler<String>,
    on_send_otp: EventHandler<String>,
    on_verify: EventHandler<Challan>,
    on_resend: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let delivered = challan.is_delivered();

    let no_toggle = challan.challan_no.clone();
    let toggle = move |_| on_toggle.call(no_toggle.clone());

    let pdf_cell = challan.pdf_url.clone();
    let open_pdf_cell = move |_| on_view_pdf.call(pdf_cell.clone());

    let pdf_action = challan.pdf_url.clone();
    let view_pdf = move |_| on_view_pdf.call(pdf_action.clone());

    let qr_action = challan.qr_code_url.clone();
    let view_qr = move |_| on_view_qr.call(qr_action.clone());

    let no_edit = challan.challan_no.clone();
    let edit = move |_| on_edit.call(no_edit.clone());

    let no_send = challan.challan_no.clone();
    let send_otp = move |_| on_send_otp.call(no_send.clone());

    let verify_target = challan.clone();
    let verify = move |_| on_verify.call(verify_target.clone());

    let no_resend = challan.challan_no.clone();
    let resend = move |_| on_resend.call(no_resend.clone());

    let no_delete = challan.challan_no.clone();
    let delete = move |_| on_delete.call(no_delete.clone());

    rsx! {
        tr {
            td { class: "check-col",
                input { r#type: "checkbox", checked: checked, onchange: toggle }
            }
            td { "{index}" }
            td { class: "challan-no-cell", onclick: open_pdf_cell, "{challan.challan_no}" }
            td { "{challan.customer_name}" }
            td { "{challan.serial_number}" }
            td { "{challan.problem}" }
            td {
                if delivered {
                    span { class: "badge badge-delivered", "Delivered" }
                } else {
                    span { class: "badge badge-pending", "Pending" }
                }
            }
            td { "{challan.date}" }
            td { class: "row-actions",
                button { class: "btn btn-sm", onclick: view_pdf, "PDF" }
                button { class: "btn btn-sm", onclick: view_qr, "QR" }
                if !delivered {
                    button { class: "btn btn-sm", onclick: edit, "Edit" }
                    button { class: "btn btn-sm", onclick: send_otp, "Send OTP" }
                    button { class: "btn btn-sm", onclick: verify, "Verify OTP" }
                } else {
                    button { class: "btn btn-sm", onclick: resend, "Resend PDF" }
                }
                button { class: "btn btn-sm btn-danger-text", onclick: delete, "Delete" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::filter::{apply, ChallanFilter};
    use api::Challan;
    use std::collections::HashSet;

    fn challan(no: &str, date: &str, status: &str) -> Challan {
        Challan {
            challan_no: no.to_string(),
            date: date.to_string(),
            status: status.to_string(),
            ..Challan::default()
        }
    }

    #[test]
    fn select_all_covers_only_the_filtered_subset() {
        let challans = vec![
            challan("CH-1", "01/03/2024", "pending"),
            challan("CH-2", "05/03/2024", "delivered"),
            challan("CH-3", "07/03/2024", "pending"),
        ];
        let filter = ChallanFilter {
            status: "pending".to_string(),
            ..ChallanFilter::default()
        };
        let filtered = apply(&challans, &filter);
        let selected: HashSet<String> = filtered.iter().map(|c| c.challan_no.clone()).collect();

        assert_eq!(
            selected,
            HashSet::from(["CH-1".to_string(), "CH-3".to_string()])
        );
        assert!(!selected.contains("CH-2"));
    }
}
