use shared::{AuthApi, View};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::AuthClient;
use crate::components::GlassCard;
use crate::{utils, VERSION};

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    pub on_navigate: Callback<View>,
}

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "⚡",
        "Instant overview",
        "Revenue, active users and projects on one screen the moment you sign in.",
    ),
    (
        "🔒",
        "Secure by default",
        "Token-based sessions and hashed passwords keep your account yours.",
    ),
    (
        "✨",
        "Built to feel fast",
        "Smooth transitions and a glass interface that stays out of your way.",
    ),
];

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    // None while the health check is pending
    let api_online = use_state(|| None::<bool>);

    {
        let api_online = api_online.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = AuthClient::new(utils::api_config());
                match client.health().await {
                    Ok(health) => api_online.set(Some(health.status == "UP")),
                    Err(e) => {
                        log::warn!("Health check failed: {}", e);
                        api_online.set(Some(false));
                    }
                }
            });
            || ()
        });
    }

    let go = |view: View| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(view))
    };

    let (status_class, status_text) = match *api_online {
        None => ("status-dot pending", "Checking service..."),
        Some(true) => ("status-dot online", "All systems operational"),
        Some(false) => ("status-dot offline", "Service unreachable"),
    };

    html! {
        <div class="landing-container">
            <header class="landing-nav">
                <div class="brand">
                    <div class="brand-mark"></div>
                    <span class="brand-name">{ "OS UI" }</span>
                </div>
                <div class="landing-nav-actions">
                    <button class="ghost-button" onclick={go(View::Login)}>{ "Log in" }</button>
                    <button class="primary-button" onclick={go(View::Signup)}>{ "Sign up" }</button>
                </div>
            </header>

            <section class="landing-hero">
                <h1 class="hero-title">
                    { "Your workspace," }<br />
                    <span class="gradient-text">{ "beautifully simple." }</span>
                </h1>
                <p class="hero-tagline">
                    { "One dashboard for the numbers that matter, wrapped in an interface you will want to open." }
                </p>
                <div class="hero-actions">
                    <button class="primary-button large" onclick={go(View::Signup)}>
                        { "Get started" }
                    </button>
                    <button class="ghost-button large" onclick={go(View::Login)}>
                        { "I already have an account" }
                    </button>
                </div>
            </section>

            <section class="landing-features">
                {
                    FEATURES.iter().map(|(icon, title, text)| html! {
                        <GlassCard key={*title} class={classes!("feature-card")}>
                            <div class="feature-icon">{ *icon }</div>
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </GlassCard>
                    }).collect::<Html>()
                }
            </section>

            <footer class="landing-footer">
                <span class={status_class}></span>
                <span class="status-text">{ status_text }</span>
                <span class="version">{ format!("v{}", VERSION) }</span>
            </footer>
        </div>
    }
}
