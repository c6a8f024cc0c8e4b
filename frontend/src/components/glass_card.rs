//! Frosted-glass panel used throughout the landing page and dashboard.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    html! {
        <div class={classes!("glass-card", props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}
