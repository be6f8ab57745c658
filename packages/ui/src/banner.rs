use dioxus::prelude::*;

/// A transient user-facing status message.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub success: bool,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }
}

/// Banner row for the message, styled by outcome.
#[component]
pub fn MessageBanner(message: StatusMessage) -> Element {
    rsx! {
        div {
            class: if message.success { "banner banner-success" } else { "banner banner-danger" },
            "{message.text}"
        }
    }
}
