mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod challans;
pub use challans::Challans;

mod challan_form;
pub use challan_form::ChallanForm;

mod settings;
pub use settings::Settings;

mod email_settings;
pub use email_settings::EmailSettings;

mod terms;
pub use terms::Terms;

mod unauthorized;
pub use unauthorized::Unauthorized;

mod layout;
pub use layout::TenantLayout;

mod guard;
pub use guard::Guard;

/// Browser confirm dialog. Accepts unconditionally off the web platform,
/// which only ever runs in tests.
pub(crate) fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|w| w.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}

/// Open a URL in a new browser tab.
pub(crate) fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("open {url}");
    }
}

/// Short delay so a confirmation banner lands before navigating away.
pub(crate) async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ms;
    }
}
