//! Dashboard overview, rendered inside `DashboardLayout`.

use shared::UserResponse;
use yew::prelude::*;

use crate::components::{ActivityChart, StatTile};
use crate::utils;

/// Sample series for the activity chart.
const ACTIVITY: [u8; 9] = [40, 70, 45, 90, 65, 80, 50, 95, 60];

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    /// Profile of the signed-in user, once verified
    #[prop_or_default]
    pub user: Option<UserResponse>,
}

/// Name shown in the header; falls back while the profile is loading.
fn display_name(user: Option<&UserResponse>) -> String {
    match user {
        Some(user) if !user.user_name.trim().is_empty() => user.user_name.clone(),
        Some(user) => user.user_id.clone(),
        None => "Guest".to_string(),
    }
}

fn member_since(user: Option<&UserResponse>) -> Option<String> {
    user.and_then(|u| u.join_date)
        .map(|joined| format!("Member since {}", joined.format("%Y-%m-%d")))
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let name = display_name(props.user.as_ref());
    let subtitle = member_since(props.user.as_ref()).unwrap_or_else(|| "Premium Plan".to_string());

    html! {
        <div class="dashboard-content">
            <header class="dashboard-header">
                <h2>{ "Overview" }</h2>
                <div class="dashboard-user">
                    <div class="user-text">
                        <p class="user-name">{ &name }</p>
                        <p class="user-plan">{ subtitle }</p>
                    </div>
                    <div class="avatar">{ utils::initials(&name) }</div>
                </div>
            </header>

            <div class="stats-grid">
                <StatTile label="Total revenue" value={utils::format_dollars(42_950)} trend={Some(AttrValue::from("+12%"))} />
                <StatTile label="Active users" value={utils::group_thousands(2_421)} highlight={true} />
                <StatTile label="Projects in progress" value="18" />
            </div>

            <ActivityChart title="Live activity" values={ACTIVITY.to_vec()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserResponse {
        UserResponse {
            user_id: "gildong".to_string(),
            user_name: name.to_string(),
            join_date: None,
            access_token: None,
        }
    }

    #[test]
    fn display_name_prefers_user_name() {
        assert_eq!(display_name(Some(&user("Hong Gildong"))), "Hong Gildong");
        assert_eq!(display_name(Some(&user("  "))), "gildong");
        assert_eq!(display_name(None), "Guest");
    }

    #[test]
    fn member_since_formats_join_date() {
        let mut u = user("Hong Gildong");
        assert_eq!(member_since(Some(&u)), None);

        u.join_date = serde_json::from_str("\"2024-03-01T09:30:00\"").ok();
        assert_eq!(
            member_since(Some(&u)).as_deref(),
            Some("Member since 2024-03-01")
        );
    }
}
