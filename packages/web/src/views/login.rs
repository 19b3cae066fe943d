//! Login form view.

use dioxus::prelude::*;
use ui::{use_api, use_auth, use_session, SessionState};

/// Email/password sign-in. On success the token and profile are persisted
/// first, then the gate flips to authenticated, so the very next API call
/// already carries the bearer token.
#[component]
pub fn LoginView(on_switch: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut auth = use_auth();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = {
        let api = api.clone();
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let session = session.clone();
            spawn(async move {
                error.set(None);
                loading.set(true);
                match api.login(email().trim(), &password()).await {
                    Ok(token) => {
                        session.save(&token.access_token, &token.user);
                        auth.set(SessionState::Authenticated(token.user));
                    }
                    Err(err) => {
                        loading.set(false);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "auth-card",
            h2 { "Login to Supreme Fitness" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            form {
                onsubmit: handle_submit,
                class: "stack",
                div {
                    class: "form-field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "primary full-width",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign In" }
                }
            }

            button {
                class: "link-button",
                onclick: move |_| on_switch.call(()),
                "Don't have an account? Register here"
            }
        }
    }
}
