//! Shell around the dashboard: sidebar navigation, account actions and the
//! page content.

use yew::prelude::*;

use super::GlassCard;

/// Sidebar sections. Purely presentational; the dashboard is one page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavItem {
    Overview,
    Users,
    Activity,
    Settings,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [
        NavItem::Overview,
        NavItem::Users,
        NavItem::Activity,
        NavItem::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Overview => "Dashboard",
            NavItem::Users => "User statistics",
            NavItem::Activity => "System activity",
            NavItem::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavItem::Overview => "▦",
            NavItem::Users => "◎",
            NavItem::Activity => "∿",
            NavItem::Settings => "⚙",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub on_logout: Callback<()>,
    pub on_withdraw: Callback<()>,
    /// Set while an account deletion request is in flight
    #[prop_or_default]
    pub withdrawing: bool,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let active = use_state(|| NavItem::Overview);

    let handle_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    let handle_withdraw = {
        let on_withdraw = props.on_withdraw.clone();
        Callback::from(move |_: MouseEvent| {
            if gloo::dialogs::confirm("Delete your account? This cannot be undone.") {
                on_withdraw.emit(());
            }
        })
    };

    html! {
        <div class="dashboard-shell">
            <aside class="dashboard-sidebar">
                <GlassCard class={classes!("sidebar-card")}>
                    <div class="brand">
                        <div class="brand-mark"></div>
                        <span class="brand-name">{ "OS UI" }</span>
                    </div>
                    <nav class="sidebar-nav">
                        {
                            NavItem::ALL.iter().map(|item| {
                                let item = *item;
                                let onclick = {
                                    let active = active.clone();
                                    Callback::from(move |_: MouseEvent| active.set(item))
                                };
                                let class = classes!("nav-item", (*active == item).then_some("active"));
                                html! {
                                    <div key={item.label()} {class} {onclick}>
                                        <span class="nav-icon">{ item.icon() }</span>
                                        <span class="nav-label">{ item.label() }</span>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </nav>
                    if let Some(error) = &props.error {
                        <p class="sidebar-error">{ error }</p>
                    }
                    <div class="sidebar-actions">
                        <button
                            class="logout-button"
                            onclick={handle_logout}
                            disabled={props.withdrawing}
                        >
                            { "Log out" }
                        </button>
                        <button
                            class="withdraw-button"
                            onclick={handle_withdraw}
                            disabled={props.withdrawing}
                        >
                            { if props.withdrawing { "Deleting..." } else { "Delete account" } }
                        </button>
                    </div>
                </GlassCard>
            </aside>
            <main class="dashboard-main">
                { props.children.clone() }
            </main>
        </div>
    }
}
