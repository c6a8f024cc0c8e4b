use shared::{AuthApi, SignUpRequest, View};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::AuthClient;
use crate::components::{FormField, GlassCard};
use crate::hooks::use_input;
use crate::utils;

#[derive(Properties, PartialEq)]
pub struct SignupPageProps {
    pub on_navigate: Callback<View>,
    /// Fired once the account exists; signing up issues no token
    pub on_registered: Callback<String>,
}

#[function_component(SignupPage)]
pub fn signup_page(props: &SignupPageProps) -> Html {
    let user_id = use_input();
    let user_name = use_input();
    let birth_date = use_input();
    let password = use_input();
    let confirm_password = use_input();
    let error = use_state(|| None::<String>);
    let field_error = use_state(|| None::<(&'static str, String)>);
    let submitting = use_state(|| false);

    let onsubmit = {
        let request = SignUpRequest {
            user_id: user_id.value.trim().to_string(),
            password: password.value.clone(),
            user_name: user_name.value.trim().to_string(),
            birth_date: birth_date.value.trim().to_string(),
            confirm_password: confirm_password.value.clone(),
        };
        let error = error.clone();
        let field_error = field_error.clone();
        let submitting = submitting.clone();
        let on_registered = props.on_registered.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            if let Err(invalid) = request.validate() {
                field_error.set(Some((invalid.field(), invalid.to_string())));
                return;
            }
            field_error.set(None);
            error.set(None);
            submitting.set(true);

            let request = request.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let on_registered = on_registered.clone();
            spawn_local(async move {
                let client = AuthClient::new(utils::api_config());
                let result = client.join(&request).await;
                submitting.set(false);
                match result {
                    Ok(user) => {
                        log::info!("Registered {}", user.user_id);
                        on_registered.emit(user.user_id);
                    }
                    Err(e) => {
                        log::error!("Sign up failed: {}", e);
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
                <h2 class="auth-title">{ "Create your account" }</h2>
                <p class="auth-subtitle">{ "It takes less than a minute." }</p>

                <form class="auth-form" {onsubmit}>
                    <FormField
                        label="User ID"
                        name="userId"
                        placeholder="4-50 characters"
                        value={user_id.value.clone()}
                        oninput={user_id.oninput.clone()}
                        error={error_for("userId")}
                        disabled={*submitting}
                    />
                    <FormField
                        label="Name"
                        name="userName"
                        value={user_name.value.clone()}
                        oninput={user_name.oninput.clone()}
                        error={error_for("userName")}
                        disabled={*submitting}
                    />
                    <FormField
                        label="Birth date"
                        name="birthDate"
                        input_type="date"
                        placeholder="2000-01-01"
                        value={birth_date.value.clone()}
                        oninput={birth_date.oninput.clone()}
                        error={error_for("birthDate")}
                        disabled={*submitting}
                    />
                    <FormField
                        label="Password"
                        name="password"
                        input_type="password"
                        placeholder="Letters, digits and one of @$!%*#?&"
                        value={password.value.clone()}
                        oninput={password.oninput.clone()}
                        error={error_for("password")}
                        disabled={*submitting}
                    />
                    <FormField
                        label="Confirm password"
                        name="confirmPassword"
                        input_type="password"
                        value={confirm_password.value.clone()}
                        oninput={confirm_password.oninput.clone()}
                        error={error_for("confirmPassword")}
                        disabled={*submitting}
                    />

                    if let Some(message) = &*error {
                        <div class="auth-error">{ message }</div>
                    }

                    <button class="primary-button full" type="submit" disabled={*submitting}>
                        { if *submitting { "Creating account..." } else { "Sign up" } }
                    </button>
                </form>

                <p class="auth-switch">
                    { "Already registered? " }
                    <button class="link-button" onclick={go(View::Login)}>{ "Log in" }</button>
                </p>
            </GlassCard>
        </div>
    }
}
