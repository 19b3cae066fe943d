use std::sync::Arc;

use dioxus::prelude::*;

use api::{ApiClient, ApiConfig, SharedPaymentProvider, SimulatedPayments};
use session::SessionStore;
use ui::{use_auth, AppHeader, AuthProvider, SessionState};
use views::{AnonymousScreen, LoadingScreen, RoleRouter};

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Constructor-injected app services. Components reach them through
    // context, so tests can assemble the same pieces around fakes.
    let session = use_context_provider(SessionStore::platform);
    use_context_provider(|| ApiClient::new(ApiConfig::from_env(), session.clone()));
    use_context_provider::<SharedPaymentProvider>(|| Arc::new(SimulatedPayments::new()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            AuthGate {}
        }
    }
}

/// Decides between the auth screens and the signed-in shell.
#[component]
fn AuthGate() -> Element {
    let auth = use_auth();

    match auth() {
        SessionState::Checking => rsx! { LoadingScreen {} },
        SessionState::Anonymous => rsx! { AnonymousScreen {} },
        SessionState::Authenticated(user) => rsx! {
            div {
                class: "app-shell",
                AppHeader { user: user.clone() }
                main {
                    RoleRouter { user }
                }
            }
        },
    }
}
