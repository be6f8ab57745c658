//! # Session-side domain models
//!
//! Types held by the persistent session store: the signed-in user, the
//! tenant they belong to, and the tenant's cached branding template.
//! Everything here is `Serialize + Deserialize` so it can round-trip
//! through the string key-value store as JSON.
//!
//! ## Role normalization
//!
//! Backends have been observed to carry the user's role under several
//! field names (`role`, `user_type`, `type`) or only as an `is_admin`
//! flag. [`Role::normalize`] collapses all of those into one canonical
//! enum value exactly once, at session-write time, so nothing downstream
//! has to repeat the fallback chain.

use serde::{Deserialize, Serialize};

/// Canonical role of a tenant user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "tenant_admin")]
    TenantAdmin,
    #[serde(rename = "tenant_staff")]
    TenantStaff,
}

impl Role {
    /// The wire spelling of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::TenantAdmin => "tenant_admin",
            Role::TenantStaff => "tenant_staff",
        }
    }

    /// Collapse the wire user's role fields into one canonical value.
    ///
    /// The first present label among `role`/`user_type`/`type` wins; only
    /// when no label is present does the `is_admin` flag decide. Unknown
    /// labels map to staff, the least-privileged role.
    pub fn normalize(
        role: Option<&str>,
        user_type: Option<&str>,
        kind: Option<&str>,
        is_admin: Option<bool>,
    ) -> Role {
        match role.or(user_type).or(kind) {
            Some(label) if label.eq_ignore_ascii_case("tenant_admin") => Role::TenantAdmin,
            Some(_) => Role::TenantStaff,
            None if is_admin == Some(true) => Role::TenantAdmin,
            None => Role::TenantStaff,
        }
    }
}

/// The signed-in user as kept in the session store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub role: Role,
}

/// The tenant (service center) the user belongs to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TenantInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Tenant branding used to render challan previews and PDFs.
///
/// Owned by the backend; a copy is cached in the session store so the
/// challan form can still render a preview when the design fetch fails.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignTemplate {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub company_address: String,
    #[serde(default)]
    pub company_phone: String,
    /// Registered email, read-only in the settings UI.
    #[serde(default)]
    pub company_email: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_footer_note")]
    pub footer_note: String,
    /// One string; paragraph blocks separated by a literal `<br/>`.
    #[serde(default)]
    pub terms_conditions: String,
    /// Persisted but currently advisory: the preview does not gate on it.
    #[serde(default = "default_true")]
    pub show_accessories: bool,
}

impl Default for DesignTemplate {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            tagline: String::new(),
            company_address: String::new(),
            company_phone: String::new(),
            company_email: String::new(),
            logo_url: String::new(),
            theme_color: default_theme_color(),
            font_family: default_font_family(),
            footer_note: default_footer_note(),
            terms_conditions: String::new(),
            show_accessories: true,
        }
    }
}

fn default_theme_color() -> String {
    "#114e9e".to_string()
}

fn default_font_family() -> String {
    "Arial, sans-serif".to_string()
}

fn default_footer_note() -> String {
    "Thank you!".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_prefers_role_label() {
        assert_eq!(
            Role::normalize(Some("tenant_admin"), Some("tenant_staff"), None, Some(false)),
            Role::TenantAdmin
        );
        assert_eq!(
            Role::normalize(Some("tenant_staff"), None, None, Some(true)),
            Role::TenantStaff
        );
    }

    #[test]
    fn normalize_falls_back_through_field_names() {
        assert_eq!(
            Role::normalize(None, Some("tenant_admin"), None, None),
            Role::TenantAdmin
        );
        assert_eq!(
            Role::normalize(None, None, Some("tenant_admin"), None),
            Role::TenantAdmin
        );
    }

    #[test]
    fn normalize_uses_admin_flag_only_without_labels() {
        assert_eq!(Role::normalize(None, None, None, Some(true)), Role::TenantAdmin);
        assert_eq!(Role::normalize(None, None, None, Some(false)), Role::TenantStaff);
        assert_eq!(Role::normalize(None, None, None, None), Role::TenantStaff);
    }

    #[test]
    fn unknown_labels_map_to_staff() {
        assert_eq!(
            Role::normalize(Some("superuser"), None, None, Some(true)),
            Role::TenantStaff
        );
    }

    #[test]
    fn design_template_fills_defaults() {
        let template: DesignTemplate = serde_json::from_str("{}").unwrap();
        assert_eq!(template.theme_color, "#114e9e");
        assert_eq!(template.font_family, "Arial, sans-serif");
        assert!(template.show_accessories);
    }
}
