//! Composition root. Owns the session controller and renders exactly one
//! view for its current state.

use shared::{
    ApiError, AuthApi, MessageResponse, SessionController, UserResponse, Verification, View,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::AuthClient;
use crate::components::DashboardLayout;
use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, login::LoginPage, signup::SignupPage,
};
use crate::storage::BrowserStore;
use crate::utils;

pub enum AppMsg {
    Navigate(View),
    SignedIn(String),
    Registered(String),
    Logout,
    Verified {
        token: String,
        outcome: Verification,
    },
    Withdraw,
    Withdrawn {
        token: String,
        result: Result<MessageResponse, ApiError>,
    },
}

/// Top-level page mounted for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Login,
    Signup,
    /// `DashboardPage` inside `DashboardLayout`
    Dashboard,
}

impl Page {
    pub fn for_view(view: View) -> Self {
        match view {
            View::Main => Page::Landing,
            View::Login => Page::Login,
            View::Signup => Page::Signup,
            View::Dashboard => Page::Dashboard,
        }
    }

    /// Key and class of the wrapper. Distinct per page so a transition
    /// remounts the subtree and replays the enter animation.
    pub fn key(&self) -> &'static str {
        match self {
            Page::Landing => "page-landing",
            Page::Login => "page-login",
            Page::Signup => "page-signup",
            Page::Dashboard => "page-dashboard",
        }
    }
}

pub struct App {
    session: SessionController<BrowserStore>,
    /// Profile from the last accepted verification
    user: Option<UserResponse>,
    /// One-shot message for the login view
    notice: Option<String>,
    withdrawing: bool,
    dashboard_error: Option<String>,
}

impl App {
    /// Ask the server whether `token` is still good.
    fn verify(ctx: &Context<Self>, token: String) {
        let link = ctx.link().clone();
        spawn_local(async move {
            let client = AuthClient::new(utils::authed_config(&token));
            let outcome = Verification::from_result(client.get_me().await);
            link.send_message(AppMsg::Verified { token, outcome });
        });
    }

    fn reset_account_state(&mut self) {
        self.user = None;
        self.withdrawing = false;
        self.dashboard_error = None;
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let mut session = SessionController::new(BrowserStore::new());
        let view = session.initialize();
        log::debug!("Initial view: {}", view);

        Self {
            session,
            user: None,
            notice: None,
            withdrawing: false,
            dashboard_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Navigate(view) => {
                self.session.transition_to(view);
                if view != View::Login {
                    self.notice = None;
                }
                true
            }
            AppMsg::SignedIn(token) => match self.session.accept_login(&token) {
                Ok(true) => {
                    self.notice = None;
                    self.reset_account_state();
                    Self::verify(ctx, token);
                    true
                }
                Ok(false) => false,
                Err(e) => {
                    log::error!("Could not store session: {}", e);
                    self.notice = Some("Your browser refused to store the session.".to_string());
                    true
                }
            },
            AppMsg::Registered(user_id) => {
                self.notice = Some(format!("Account {} created. Log in to continue.", user_id));
                self.session.transition_to(View::Login);
                true
            }
            AppMsg::Logout => {
                let token = self.session.credential();
                self.session.logout();
                self.reset_account_state();

                if let Some(token) = token {
                    spawn_local(async move {
                        let client = AuthClient::new(utils::authed_config(&token));
                        if let Err(e) = client.logout().await {
                            log::warn!("Logout notification failed: {}", e);
                        }
                    });
                }
                true
            }
            AppMsg::Verified { token, outcome } => {
                if let Some(user) = self.session.apply_verification(&token, outcome) {
                    self.user = Some(user);
                }
                true
            }
            AppMsg::Withdraw => {
                let Some(token) = self.session.credential() else {
                    ctx.link().send_message(AppMsg::Logout);
                    return false;
                };
                self.withdrawing = true;
                self.dashboard_error = None;

                let link = ctx.link().clone();
                spawn_local(async move {
                    let client = AuthClient::new(utils::authed_config(&token));
                    let result = client.withdraw().await;
                    link.send_message(AppMsg::Withdrawn { token, result });
                });
                true
            }
            AppMsg::Withdrawn { token, result } => {
                // The session that asked may be gone; its answer must not touch the next one
                if self.session.credential().as_deref() != Some(token.as_str()) {
                    log::debug!("Dropping withdrawal result for a closed session");
                    return false;
                }
                self.withdrawing = false;
                match result {
                    Ok(response) => {
                        log::info!("Account deleted: {}", response.message);
                        if self.session.apply_withdrawal(&token) {
                            self.reset_account_state();
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to delete account: {}", e);
                        self.dashboard_error = Some(e.user_message());
                    }
                }
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        // Startup only routes on token presence; check it once it is on screen
        if first_render && self.session.view() == View::Dashboard {
            if let Some(token) = self.session.credential() {
                Self::verify(ctx, token);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let page = Page::for_view(self.session.view());
        let on_navigate = link.callback(AppMsg::Navigate);

        let content = match page {
            Page::Landing => html! { <LandingPage {on_navigate} /> },
            Page::Login => html! {
                <LoginPage
                    {on_navigate}
                    on_signed_in={link.callback(AppMsg::SignedIn)}
                    notice={self.notice.clone()}
                />
            },
            Page::Signup => html! {
                <SignupPage
                    {on_navigate}
                    on_registered={link.callback(AppMsg::Registered)}
                />
            },
            Page::Dashboard => html! {
                <DashboardLayout
                    on_logout={link.callback(|_| AppMsg::Logout)}
                    on_withdraw={link.callback(|_| AppMsg::Withdraw)}
                    withdrawing={self.withdrawing}
                    error={self.dashboard_error.clone()}
                >
                    <DashboardPage user={self.user.clone()} />
                </DashboardLayout>
            },
        };

        html! {
            <div class="app-shell">
                <div key={page.key()} class={classes!("view-transition", page.key())}>
                    { content }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn each_view_mounts_its_own_page() {
        assert_eq!(Page::for_view(View::Main), Page::Landing);
        assert_eq!(Page::for_view(View::Login), Page::Login);
        assert_eq!(Page::for_view(View::Signup), Page::Signup);
        assert_eq!(Page::for_view(View::Dashboard), Page::Dashboard);
    }

    #[test]
    fn views_never_share_a_page() {
        let pages: HashSet<Page> = View::ALL.iter().map(|v| Page::for_view(*v)).collect();
        assert_eq!(pages.len(), View::ALL.len());

        let keys: HashSet<&str> = pages.iter().map(|p| p.key()).collect();
        assert_eq!(keys.len(), pages.len());
    }
}
