//! Registration form view.

use dioxus::prelude::*;
use ui::{alert, use_api};

use api::{NewUser, Role};

/// Sign-up form. Registration does not log the user in: new accounts may
/// await admin approval, so on success the view alerts and switches back to
/// the login form.
#[component]
pub fn RegisterView(on_switch: EventHandler<()>) -> Element {
    let api = use_api();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| "member".to_string());
    let mut phone = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            spawn(async move {
                error.set(None);
                loading.set(true);

                let phone_value = phone().trim().to_string();
                let new_user = NewUser {
                    email: email().trim().to_string(),
                    password: password(),
                    full_name: full_name().trim().to_string(),
                    role: if role() == "trainer" { Role::Trainer } else { Role::Member },
                    phone: (!phone_value.is_empty()).then_some(phone_value),
                };

                match api.register(&new_user).await {
                    Ok(_) => {
                        alert("Registration successful! Please login to continue.");
                        on_switch.call(());
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
            h2 { "Join Supreme Fitness" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            form {
                onsubmit: handle_submit,
                class: "stack",
                div {
                    class: "form-field",
                    label { "Full Name" }
                    input {
                        r#type: "text",
                        required: true,
                        value: full_name(),
                        oninput: move |evt| full_name.set(evt.value()),
                    }
                }
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
                div {
                    class: "form-field",
                    label { "Role" }
                    select {
                        value: role(),
                        onchange: move |evt| role.set(evt.value()),
                        option { value: "member", "Member" }
                        option { value: "trainer", "Trainer" }
                    }
                }
                div {
                    class: "form-field",
                    label { "Phone (Optional)" }
                    input {
                        r#type: "tel",
                        value: phone(),
                        oninput: move |evt| phone.set(evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "primary full-width",
                    disabled: loading(),
                    if loading() { "Registering..." } else { "Register" }
                }
            }

            button {
                class: "link-button",
                onclick: move |_| on_switch.call(()),
                "Already have an account? Login here"
            }
        }
    }
}
