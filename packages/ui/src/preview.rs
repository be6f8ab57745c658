//! Live challan document preview.
//!
//! A pure mapping from (branding template, draft data) to a rendered
//! document, re-evaluated synchronously whenever either input changes.
//! Every data field falls back to a literal placeholder so the preview is
//! always renderable over an empty form — the settings page relies on the
//! same property to prove a design without real challan data. The one
//! thing read from outside the inputs is the logged-in user's display
//! name, shown in the disabled "given by" field.

use dioxus::prelude::*;

use api::models::ChallanDraft;
use store::DesignTemplate;

use crate::use_session;

const DEFAULT_THEME_COLOR: &str = "#114e9e";
const DEFAULT_FONT_FAMILY: &str = "Arial, sans-serif";

/// Placeholder when a field is blank.
fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Terms are one string with literal `<br/>` separators between paragraph
/// blocks. Empty input renders no block at all.
fn split_terms(terms: &str) -> Vec<&str> {
    if terms.is_empty() {
        return Vec::new();
    }
    terms.split("<br/>").collect()
}

/// Comma-joined accessory list, or a placeholder dash when none are
/// ticked.
fn accessories_line(accessories: &[String]) -> String {
    if accessories.is_empty() {
        "—".to_string()
    } else {
        accessories.join(", ")
    }
}

#[cfg(target_arch = "wasm32")]
fn today_string() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:02}/{:02}/{}",
        date.get_date(),
        date.get_month() + 1,
        date.get_full_year()
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn today_string() -> String {
    "—".to_string()
}

/// The rendered challan document.
#[component]
pub fn ChallanPreview(
    template: DesignTemplate,
    data: ChallanDraft,
    challan_no: Option<String>,
    created_at: Option<String>,
) -> Element {
    let session = use_session();
    let given_by = session()
        .map(|s| s.user.name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    let theme = or_placeholder(&template.theme_color, DEFAULT_THEME_COLOR).to_string();
    let font = or_placeholder(&template.font_family, DEFAULT_FONT_FAMILY).to_string();
    let challan_no = challan_no.unwrap_or_else(|| "CH-XXXXX".to_string());
    let date_line = created_at.unwrap_or_else(today_string);
    let accessories = accessories_line(&data.accessories);
    let warranty = data.warranty.map(|w| w.label()).unwrap_or("—");
    let terms: Vec<String> = split_terms(&template.terms_conditions)
        .into_iter()
        .map(String::from)
        .collect();

    rsx! {
        div {
            class: "challan-preview",
            style: "font-family: {font};",

            div {
                class: "preview-header",
                style: "border-top: 6px solid {theme};",

                div { class: "preview-header-row",
                    div { class: "preview-company",
                        if !template.logo_url.is_empty() {
                            img {
                                class: "preview-logo",
                                src: "{template.logo_url}",
                                alt: "Company Logo",
                            }
                        }
                        div {
                            h4 {
                                class: "preview-company-name",
                                style: "color: {theme};",
                                {or_placeholder(&template.company_name, "Company Name")}
                            }
                            if !template.tagline.is_empty() {
                                div { class: "preview-tagline", "{template.tagline}" }
                            }
                            if !template.company_address.is_empty() {
                                div { class: "preview-contact", "{template.company_address}" }
                            }
                            if !template.company_phone.is_empty() {
                                div { class: "preview-contact", "Phone: {template.company_phone}" }
                            }
                            if !template.company_email.is_empty() {
                                div { class: "preview-contact", "Email: {template.company_email}" }
                            }
                        }
                    }

                    div { class: "preview-meta",
                        div {
                            strong { "Challan No: " }
                            "{challan_no}"
                        }
                        div {
                            strong { "Date: " }
                            "{date_line}"
                        }
                    }
                }
            }

            hr {}

            div { class: "preview-customer",
                div {
                    strong { "Customer: " }
                    {or_placeholder(&data.customer_name, "John Doe")}
                }
                div {
                    strong { "Email: " }
                    {or_placeholder(&data.email, "example@email.com")}
                }
                div {
                    strong { "Contact: " }
                    {or_placeholder(&data.contact_number, "9999999999")}
                }
                div {
                    strong { "City: " }
                    {or_placeholder(&data.city, "Nashik")}
                }
                div {
                    strong { "Serial Number: " }
                    {or_placeholder(&data.serial_number, "SN-12345")}
                }
            }

            if !data.items.is_empty() {
                div { class: "preview-items",
                    h6 { style: "color: {theme};", "Item Details" }
                    table { class: "preview-item-table",
                        thead {
                            tr {
                                th { "#" }
                                th { "Description" }
                                th { class: "preview-qty-col", "Qty" }
                            }
                        }
                        tbody {
                            for (no, item) in data.items.iter().enumerate().map(|(i, item)| (i + 1, item)) {
                                tr { key: "{no}",
                                    td { "{no}" }
                                    td { {or_placeholder(&item.description, "—")} }
                                    td { "{item.quantity}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "preview-additional",
                h6 { style: "color: {theme};", "Additional Info" }
                div {
                    strong { "Accessories: " }
                    "{accessories}"
                }
                div {
                    strong { "Warranty: " }
                    "{warranty}"
                }
                div {
                    strong { "Dispatch Through: " }
                    {or_placeholder(&data.dispatch_through, "—")}
                }
            }

            div { class: "preview-given-by",
                strong { "Challan Given By: " }
                input {
                    r#type: "text",
                    value: "{given_by}",
                    disabled: true,
                }
            }

            div { class: "preview-problem",
                strong { "Problem: " }
                div { class: "preview-problem-box",
                    {or_placeholder(&data.problem, "Describe problem here...")}
                }
            }

            if !terms.is_empty() {
                div { class: "preview-terms",
                    for (no, term) in terms.iter().enumerate() {
                        p { key: "{no}", "{term}" }
                    }
                }
            }

            div { class: "preview-footer",
                {or_placeholder(&template.footer_note, "Thank you for choosing us!")}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_split_into_paragraph_blocks() {
        assert_eq!(
            split_terms("Line1<br/>Line2<br/>Line3"),
            vec!["Line1", "Line2", "Line3"]
        );
    }

    #[test]
    fn empty_terms_render_no_blocks() {
        assert!(split_terms("").is_empty());
    }

    #[test]
    fn single_block_needs_no_delimiter() {
        assert_eq!(split_terms("Only line"), vec!["Only line"]);
    }

    #[test]
    fn placeholders_cover_blank_fields() {
        assert_eq!(or_placeholder("", "John Doe"), "John Doe");
        assert_eq!(or_placeholder("   ", "SN-12345"), "SN-12345");
        assert_eq!(or_placeholder("Asha", "John Doe"), "Asha");
    }

    #[test]
    fn accessories_join_or_dash() {
        assert_eq!(accessories_line(&[]), "—");
        assert_eq!(
            accessories_line(&["Charger".to_string(), "Adapter".to_string()]),
            "Charger, Adapter"
        );
    }

    #[test]
    fn empty_template_falls_back_to_defaults() {
        let template = DesignTemplate {
            theme_color: String::new(),
            font_family: String::new(),
            ..DesignTemplate::default()
        };
        assert_eq!(
            or_placeholder(&template.theme_color, DEFAULT_THEME_COLOR),
            "#114e9e"
        );
        assert_eq!(
            or_placeholder(&template.font_family, DEFAULT_FONT_FAMILY),
            "Arial, sans-serif"
        );
    }
}
