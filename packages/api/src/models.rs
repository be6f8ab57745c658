//! # Wire models for the challan backend
//!
//! Every body this client sends or receives. Deserialization is
//! deliberately tolerant: fields default when absent, numeric-or-string
//! identifiers are normalized to strings, and the challan list accepts
//! both of the shapes the backend has been seen to produce.

use serde::{Deserialize, Deserializer, Serialize};

use store::{DesignTemplate, Role, Session, TenantInfo, UserInfo};

/// Fixed vocabulary of accessory checkboxes on the challan form.
pub const ACCESSORY_OPTIONS: [&str; 16] = [
    "Desktop",
    "Laptop",
    "SSD",
    "Adapter",
    "RAM",
    "Carry Case",
    "HDD",
    "Damage",
    "Mother Board",
    "Printer",
    "CPU",
    "Toner",
    "LCD / LED / IPS",
    "Head",
    "Keyboard or Mouse",
    "Speaker",
];

/// Mutually exclusive warranty states printed on a challan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Warranty {
    #[serde(rename = "Warranty")]
    Warranty,
    #[serde(rename = "No Warranty")]
    NoWarranty,
    #[serde(rename = "Chargeable")]
    Chargeable,
    #[serde(rename = "Material Send to Customer")]
    MaterialSendToCustomer,
}

impl Warranty {
    pub const ALL: [Warranty; 4] = [
        Warranty::Warranty,
        Warranty::NoWarranty,
        Warranty::Chargeable,
        Warranty::MaterialSendToCustomer,
    ];

    /// The label shown on the form and stored on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Warranty::Warranty => "Warranty",
            Warranty::NoWarranty => "No Warranty",
            Warranty::Chargeable => "Chargeable",
            Warranty::MaterialSendToCustomer => "Material Send to Customer",
        }
    }

    /// Parse a wire label; unknown or empty strings are no selection.
    pub fn parse(label: &str) -> Option<Warranty> {
        Warranty::ALL.iter().copied().find(|w| w.label() == label)
    }
}

fn warranty_or_none<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Warranty>, D::Error> {
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.as_deref().and_then(Warranty::parse))
}

/// One row of the item table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChallanItem {
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl Default for ChallanItem {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: 1,
        }
    }
}

fn default_quantity() -> u32 {
    1
}

/// The editable copy of a challan, serialized whole into the multipart
/// `data` field on submit. Identity and server-assigned fields live on
/// [`Challan`] instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChallanDraft {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub accessories: Vec<String>,
    #[serde(default, deserialize_with = "warranty_or_none")]
    pub warranty: Option<Warranty>,
    #[serde(default)]
    pub dispatch_through: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default = "default_items")]
    pub items: Vec<ChallanItem>,
}

impl Default for ChallanDraft {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            email: String::new(),
            contact_number: String::new(),
            city: String::new(),
            serial_number: String::new(),
            problem: String::new(),
            accessories: Vec::new(),
            warranty: None,
            dispatch_through: String::new(),
            employee_id: String::new(),
            items: default_items(),
        }
    }
}

fn default_items() -> Vec<ChallanItem> {
    vec![ChallanItem::default()]
}

impl ChallanDraft {
    /// Editor invariant: the item table always has at least one row.
    pub fn ensure_items(&mut self) {
        if self.items.is_empty() {
            self.items.push(ChallanItem::default());
        }
    }

    /// Append a fresh blank row. Rows are never removed.
    pub fn add_item(&mut self) {
        self.items.push(ChallanItem::default());
    }

    /// Membership toggle over the accessory set.
    pub fn toggle_accessory(&mut self, name: &str) {
        if let Some(pos) = self.accessories.iter().position(|a| a == name) {
            self.accessories.remove(pos);
        } else {
            self.accessories.push(name.to_string());
        }
    }
}

/// A challan record as the backend returns it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Challan {
    #[serde(default)]
    pub challan_no: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub accessories: Vec<String>,
    #[serde(default, deserialize_with = "warranty_or_none")]
    pub warranty: Option<Warranty>,
    #[serde(default)]
    pub dispatch_through: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub items: Vec<ChallanItem>,
    /// Matched case-insensitively against "pending"/"delivered".
    #[serde(default)]
    pub status: String,
    /// Display string, `DD/MM/YYYY` optionally followed by `,HH:MM`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub qr_code_url: Option<String>,
}

impl Challan {
    pub fn is_delivered(&self) -> bool {
        self.status.eq_ignore_ascii_case("delivered")
    }

    /// The editable copy loaded into the form for an update.
    pub fn to_draft(&self) -> ChallanDraft {
        let mut draft = ChallanDraft {
            customer_name: self.customer_name.clone(),
            email: self.email.clone(),
            contact_number: self.contact_number.clone(),
            city: self.city.clone(),
            serial_number: self.serial_number.clone(),
            problem: self.problem.clone(),
            accessories: self.accessories.clone(),
            warranty: self.warranty,
            dispatch_through: self.dispatch_through.clone(),
            employee_id: self.employee_id.clone(),
            items: self.items.clone(),
        };
        draft.ensure_items();
        draft
    }
}

/// The list endpoint returns either a bare array or `{"challans": [...]}`.
/// Anything else decodes to an empty list rather than an error so the UI
/// never renders a stale collection.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ChallanListBody {
    Bare(Vec<Challan>),
    Wrapped { challans: Vec<Challan> },
    Other(serde_json::Value),
}

impl ChallanListBody {
    pub fn into_vec(self) -> Vec<Challan> {
        match self {
            ChallanListBody::Bare(challans) => challans,
            ChallanListBody::Wrapped { challans } => challans,
            ChallanListBody::Other(value) => {
                tracing::warn!("challan list had unexpected shape: {value}");
                Vec::new()
            }
        }
    }
}

/// Counts shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub delivered: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct DesignResponse {
    #[serde(default)]
    pub design: Option<DesignTemplate>,
}

/// The full settings document: branding plus a slot the backend reserves
/// for future challan-layout customization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsBlob {
    #[serde(default)]
    pub branding: Option<DesignTemplate>,
    #[serde(default)]
    pub challan: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TermsBody {
    #[serde(default)]
    pub terms_conditions: String,
}

/// Tenant SMTP configuration for challan delivery mail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmailSettings {
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub sender_email: String,
    #[serde(default)]
    pub sender_password: String,
    #[serde(default)]
    pub smtp_server: String,
    /// Kept as text end-to-end; the backend owns validation.
    #[serde(default, deserialize_with = "stringy")]
    pub smtp_port: String,
    #[serde(default = "default_true")]
    pub use_tls: bool,
    #[serde(default)]
    pub use_ssl: bool,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            sender_name: String::new(),
            sender_email: String::new(),
            sender_password: String::new(),
            smtp_server: String::new(),
            smtp_port: String::new(),
            use_tls: true,
            use_ssl: false,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct EmailSettingsResponse {
    #[serde(default)]
    pub email_config: Option<EmailSettings>,
}

/// Server message returned by the OTP endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OtpMessage {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UploadLogoResponse {
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Raw `POST /login` payload before normalization.
#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: WireUser,
    #[serde(default)]
    pub tenant: WireTenant,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireUser {
    #[serde(default, deserialize_with = "stringy")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireTenant {
    #[serde(default, deserialize_with = "stringy")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl LoginResponse {
    /// Normalize the wire payload into a canonical [`Session`]. None when
    /// the backend omitted the token.
    pub fn into_session(self) -> Option<Session> {
        let token = self.token.filter(|t| !t.is_empty())?;
        let role = Role::normalize(
            self.user.role.as_deref(),
            self.user.user_type.as_deref(),
            self.user.kind.as_deref(),
            self.user.is_admin,
        );
        let name = self
            .user
            .name
            .or(self.user.full_name)
            .unwrap_or_default();
        Some(Session {
            token,
            user: UserInfo {
                id: self.user.id,
                name,
                role,
            },
            tenant: TenantInfo {
                id: self.tenant.id,
                name: self.tenant.name,
            },
        })
    }
}

/// Accept strings, numbers, or null where the backend is inconsistent.
fn stringy<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(de)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_accepts_bare_array() {
        let body: ChallanListBody =
            serde_json::from_str(r#"[{"challan_no":"CH-1"},{"challan_no":"CH-2"}]"#).unwrap();
        let challans = body.into_vec();
        assert_eq!(challans.len(), 2);
        assert_eq!(challans[0].challan_no, "CH-1");
    }

    #[test]
    fn list_accepts_wrapped_object() {
        let body: ChallanListBody =
            serde_json::from_str(r#"{"challans":[{"challan_no":"CH-9"}]}"#).unwrap();
        assert_eq!(body.into_vec()[0].challan_no, "CH-9");
    }

    #[test]
    fn list_maps_anything_else_to_empty() {
        let body: ChallanListBody =
            serde_json::from_str(r#"{"message":"tunnel starting"}"#).unwrap();
        assert!(body.into_vec().is_empty());
    }

    #[test]
    fn draft_round_trips_items_and_accessories() {
        let mut draft = ChallanDraft::default();
        draft.items[0].description = "Power supply".to_string();
        draft.items[0].quantity = 2;
        draft.add_item();
        draft.items[1].description = "Cable".to_string();
        draft.toggle_accessory("Adapter");

        let encoded = serde_json::to_string(&draft).unwrap();
        let decoded: ChallanDraft = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.items.len(), 2);
        assert_eq!(decoded.items[0].description, "Power supply");
        assert_eq!(decoded.items[0].quantity, 2);
        assert_eq!(decoded.items[1].description, "Cable");
        assert_eq!(decoded.accessories, vec!["Adapter".to_string()]);
    }

    #[test]
    fn toggle_accessory_is_membership() {
        let mut draft = ChallanDraft::default();
        draft.toggle_accessory("SSD");
        assert_eq!(draft.accessories, vec!["SSD".to_string()]);
        draft.toggle_accessory("SSD");
        assert!(draft.accessories.is_empty());
    }

    #[test]
    fn warranty_tolerates_empty_and_unknown() {
        let challan: Challan = serde_json::from_str(r#"{"warranty":""}"#).unwrap();
        assert_eq!(challan.warranty, None);
        let challan: Challan = serde_json::from_str(r#"{"warranty":"Lifetime"}"#).unwrap();
        assert_eq!(challan.warranty, None);
        let challan: Challan = serde_json::from_str(r#"{"warranty":"No Warranty"}"#).unwrap();
        assert_eq!(challan.warranty, Some(Warranty::NoWarranty));
    }

    #[test]
    fn to_draft_restores_the_blank_row() {
        let challan: Challan = serde_json::from_str(r#"{"challan_no":"CH-3","items":[]}"#).unwrap();
        assert_eq!(challan.to_draft().items.len(), 1);
    }

    #[test]
    fn login_response_normalizes_role_and_name() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"token":"t","user":{"id":7,"full_name":"Asha K","user_type":"tenant_admin"},"tenant":{"id":"t1","name":"Phoenix"}}"#,
        )
        .unwrap();
        let session = resp.into_session().unwrap();
        assert_eq!(session.user.id, "7");
        assert_eq!(session.user.name, "Asha K");
        assert_eq!(session.user.role, Role::TenantAdmin);
        assert_eq!(session.tenant.name, "Phoenix");
    }

    #[test]
    fn login_response_without_token_is_rejected() {
        let resp: LoginResponse = serde_json::from_str(r#"{"user":{},"tenant":{}}"#).unwrap();
        assert!(resp.into_session().is_none());
    }

    #[test]
    fn email_settings_accept_numeric_port() {
        let resp: EmailSettingsResponse =
            serde_json::from_str(r#"{"email_config":{"sender_email":"a@b.c","smtp_port":587}}"#)
                .unwrap();
        assert_eq!(resp.email_config.unwrap().smtp_port, "587");
    }
}
