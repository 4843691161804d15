//! Account page for signed-in visitors. Guarded by `ProtectedRoute`.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::token_store;

fn placeholder() -> String {
    "—".to_owned()
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = move || auth.get().user.and_then(|u| u.email).unwrap_or_else(placeholder);
    let user_id = move || auth.get().user.and_then(|u| u.id).unwrap_or_else(placeholder);
    let role = move || auth.get().role().map_or_else(placeholder, str::to_owned);

    let on_sign_out = move |_| {
        token_store::clear();
        auth.update(AuthState::sign_out);
    };

    view! {
        <div class="account">
            <h1>"Your account"</h1>
            <dl class="card account__details">
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"User ID"</dt>
                <dd>{user_id}</dd>
                <dt>"Role"</dt>
                <dd>{role}</dd>
            </dl>
            <button class="button button--outline" on:click=on_sign_out>"Sign out"</button>
        </div>
    }
}
