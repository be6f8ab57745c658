pub mod models;
pub mod session;
pub mod token;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use models::{DesignTemplate, Role, TenantInfo, UserInfo};
pub use session::{Session, SessionStore};
pub use token::is_token_expired;
