//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{make_store, use_session, SessionProvider};

mod guard;
pub use guard::{evaluate_access, GuardOutcome};

mod loader;
pub use loader::Loader;

mod banner;
pub use banner::{MessageBanner, StatusMessage};

mod preview;
pub use preview::ChallanPreview;
