//! # API crate — REST client for the challan backend
//!
//! Every backend call the frontends make goes through this crate. It owns
//! the HTTP client, the error taxonomy, the wire models, and the
//! client-side filter that the challans list applies after loading.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Base-URL configuration, bearer-token injection, JSON/multipart request helpers, and the content-type guard that catches proxy error pages served with a success status |
//! | [`error`] | [`ApiError`]: network, status, gateway, and decode failures |
//! | [`models`] | Wire types: challans, drafts, settings blobs, dashboard stats, login payloads |
//! | [`auth`] | `POST /login` and normalization of its response into a [`Session`] |
//! | [`challans`] | Challan CRUD, OTP send/verify, PDF resend, the all-settled bulk delete, dashboard stats |
//! | [`settings`] | Branding design, terms text, email/SMTP configuration, logo upload |
//! | [`filter`] | Date/status filtering over a loaded challan collection |

pub mod auth;
pub mod challans;
pub mod client;
pub mod error;
pub mod filter;
pub mod models;
pub mod settings;

pub use client::{asset_url, base_url, ApiClient};
pub use error::ApiError;
pub use models::{
    Challan, ChallanDraft, ChallanItem, DashboardStats, EmailSettings, Warranty,
    ACCESSORY_OPTIONS,
};

pub use store::{DesignTemplate, Role, Session, TenantInfo, UserInfo};
