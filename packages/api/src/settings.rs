//! Tenant configuration endpoints: branding design, terms text, email
//! settings, and logo upload.

use store::DesignTemplate;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    DesignResponse, EmailSettings, EmailSettingsResponse, SettingsBlob, TermsBody,
    UploadLogoResponse,
};

/// The branding template used for previews and PDFs. None when the tenant
/// has not saved a design yet.
pub async fn design(client: &ApiClient) -> Result<Option<DesignTemplate>, ApiError> {
    let resp: DesignResponse = client.get_json("/design").await?;
    Ok(resp.design)
}

/// The full settings document.
pub async fn settings(client: &ApiClient) -> Result<SettingsBlob, ApiError> {
    client.get_json("/settings").await
}

/// Persist the branding template.
pub async fn save_settings(client: &ApiClient, branding: &DesignTemplate) -> Result<(), ApiError> {
    let blob = SettingsBlob {
        branding: Some(branding.clone()),
        challan: serde_json::Map::new(),
    };
    client.put_unit("/settings", &blob).await
}

pub async fn terms(client: &ApiClient) -> Result<String, ApiError> {
    let body: TermsBody = client.get_json("/settings/terms").await?;
    Ok(body.terms_conditions)
}

pub async fn save_terms(client: &ApiClient, terms_conditions: &str) -> Result<(), ApiError> {
    client
        .put_unit(
            "/settings/terms",
            &TermsBody {
                terms_conditions: terms_conditions.to_string(),
            },
        )
        .await
}

/// SMTP configuration, if the tenant has saved one.
pub async fn email_settings(client: &ApiClient) -> Result<Option<EmailSettings>, ApiError> {
    let resp: EmailSettingsResponse = client.get_json("/email_settings").await?;
    Ok(resp.email_config)
}

pub async fn save_email_settings(
    client: &ApiClient,
    settings: &EmailSettings,
) -> Result<(), ApiError> {
    client.post_unit("/email_settings", settings).await
}

/// Upload a logo image; returns the stored URL when the backend accepted
/// it.
pub async fn upload_logo(
    client: &ApiClient,
    file_name: String,
    bytes: Vec<u8>,
) -> Result<Option<String>, ApiError> {
    let form = reqwest::multipart::Form::new()
        .part("logo", reqwest::multipart::Part::bytes(bytes).file_name(file_name));
    let resp: UploadLogoResponse = client.post_multipart("/upload_logo", form).await?;
    Ok(resp.logo_url)
}
