//! Tenant login page.

use dioxus::prelude::*;

use store::Role;
use ui::{make_store, use_session};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    // Already signed in with a live token: skip the form
    if let Some(s) = session() {
        if !s.is_expired() {
            nav.replace(home_route(s.user.role));
        }
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let client = api::ApiClient::new(None);
            match api::auth::login(&client, email().trim(), &password()).await {
                Ok(resp) => match resp.into_session() {
                    Some(new_session) => {
                        new_session.save(&make_store());
                        let role = new_session.user.role;
                        session.set(Some(new_session));
                        nav.push(home_route(role));
                    }
                    None => {
                        loading.set(false);
                        error.set(Some("Invalid server response".to_string()));
                    }
                },
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    loading.set(false);
                    error.set(Some(login_error_message(&err)));
                }
            }
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-heading",
                    h3 { "Tenant Login" }
                    p { class: "muted", "Sign in to manage your service center" }
                }

                if let Some(err) = error() {
                    div { class: "banner banner-danger", "{err}" }
                }

                form { onsubmit: handle_submit,
                    div { class: "form-field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            required: true,
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div { class: "form-field",
                        label { "Password" }
                        input {
                            r#type: "password",
                            placeholder: "••••••••",
                            value: password(),
                            required: true,
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    button {
                        class: "btn btn-primary login-btn",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                }
            }
        }
    }
}

/// Admins land on the dashboard, staff on the challans list.
fn home_route(role: Role) -> Route {
    match role {
        Role::TenantAdmin => Route::Dashboard {},
        Role::TenantStaff => Route::Challans {},
    }
}

/// Prefer the backend's own message; generic fallback otherwise.
fn login_error_message(err: &api::ApiError) -> String {
    match err {
        api::ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
        _ => "Invalid email or password".to_string(),
    }
}
