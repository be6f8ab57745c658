use dioxus::prelude::*;

/// Centered spinner with a caption, optionally filling the viewport.
#[component]
pub fn Loader(
    #[props(default = "Loading...".to_string())] text: String,
    #[props(default)] fullscreen: bool,
) -> Element {
    rsx! {
        div {
            class: if fullscreen { "loader loader-fullscreen" } else { "loader" },
            div { class: "spinner" }
            div { class: "loader-text", "{text}" }
        }
    }
}
