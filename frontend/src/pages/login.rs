use shared::{AuthApi, LoginRequest, View};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::AuthClient;
use crate::components::{FormField, GlassCard};
use crate::hooks::use_input;
use crate::utils;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub on_navigate: Callback<View>,
    /// Receives the issued access token
    pub on_signed_in: Callback<String>,
    /// Message carried over from another view (e.g. after signing up)
    #[prop_or_default]
    pub notice: Option<String>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let user_id = use_input();
    let password = use_input();
    let error = use_state(|| None::<String>);
    let field_error = use_state(|| None::<(&'static str, String)>);
    let submitting = use_state(|| false);

    let onsubmit = {
        let user_id = user_id.value.clone();
        let password = password.value.clone();
        let error = error.clone();
        let field_error = field_error.clone();
        let submitting = submitting.clone();
        let on_signed_in = props.on_signed_in.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = LoginRequest::new(user_id.trim(), password.clone());
            if let Err(invalid) = request.validate() {
                field_error.set(Some((invalid.field(), invalid.to_string())));
                return;
            }
            field_error.set(None);
            error.set(None);
            submitting.set(true);

            let error = error.clone();
            let submitting = submitting.clone();
            let on_signed_in = on_signed_in.clone();
            spawn_local(async move {
                let client = AuthClient::new(utils::api_config());
                let result = client.login(&request).await;
                submitting.set(false);
                match result {
                    Ok(user) => match user.token() {
                        Some(token) => on_signed_in.emit(token.to_string()),
                        None => {
                            log::error!("Login for {} returned no token", user.user_id);
                            error.set(Some("The server did not issue a session.".to_string()));
                        }
                    },
                    Err(e) => {
                        log::error!("Login failed: {}", e);
                        error.set(Some(e.user_message()));
                    }
                }
            });
        })
    };

    let go = |view: View| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(view))
    };

    let error_for = |field: &str| {
        (*field_error)
            .as_ref()
            .filter(|(f, _)| *f == field)
            .map(|(_, msg)| msg.clone())
    };

    html! {
        <div class="auth-container">
            <GlassCard class={classes!("auth-card")}>
                <button class="back-link" onclick={go(View::Main)}>{ "← Back" }</button>
                <h2 class="auth-title">{ "Welcome back" }</h2>
                <p class="auth-subtitle">{ "Log in to open your dashboard." }</p>

                if let Some(notice) = &props.notice {
                    <div class="auth-notice">{ notice }</div>
                }

                <form class="auth-form" {onsubmit}>
                    <FormField
                        label="User ID"
                        name="userId"
                        value={user_id.value.clone()}
                        oninput={user_id.oninput.clone()}
                        error={error_for("userId")}
                        disabled={*submitting}
                    />
                    <FormField
                        label="Password"
                        name="password"
                        input_type="password"
                        value={password.value.clone()}
                        oninput={password.oninput.clone()}
                        error={error_for("password")}
                        disabled={*submitting}
                    />

                    if let Some(message) = &*error {
                        <div class="auth-error">{ message }</div>
                    }

                    <button class="primary-button full" type="submit" disabled={*submitting}>
                        { if *submitting { "Logging in..." } else { "Log in" } }
                    </button>
                </form>

                <p class="auth-switch">
                    { "No account yet? " }
                    <button class="link-button" onclick={go(View::Signup)}>{ "Sign up" }</button>
                </p>
            </GlassCard>
        </div>
    }
}
