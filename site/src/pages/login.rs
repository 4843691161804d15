//! Login page: sign in with an access token issued by the Okami dashboard.
//!
//! The site has no credential backend. A visitor pastes an existing token;
//! it is decoded, stored under the token key and the session is marked
//! signed in. The surrounding public-only guard then sends them home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::token_store;

/// Trim the pasted token and make sure it decodes before it is stored.
pub(crate) fn validate_token_input(raw: &str) -> Result<String, String> {
    let token = raw.trim();
    if token.is_empty() {
        return Err("Paste your access token first.".to_owned());
    }
    gate::decode_claims(token).map_err(|e| format!("That token could not be read ({e})."))?;
    Ok(token.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let token_input = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let token = match validate_token_input(&token_input.get()) {
            Ok(token) => token,
            Err(message) => {
                info.set(message);
                return;
            }
        };
        let mut next = auth.get_untracked();
        match next.sign_in(token.clone()) {
            Ok(()) => {
                token_store::write(&token);
                auth.set(next);
            }
            Err(e) => info.set(format!("Sign-in failed: {e}")),
        }
    };

    view! {
        <div class="login-page">
            <div class="card login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">"Paste the access token from your Okami dashboard."</p>
                <form class="login-form" on:submit=on_submit>
                    <textarea
                        class="input login-input"
                        rows="4"
                        placeholder="eyJhbGciOi..."
                        prop:value=move || token_input.get()
                        on:input=move |ev| token_input.set(event_target_value(&ev))
                    ></textarea>
                    <button class="button" type="submit">"Sign in"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-error">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
