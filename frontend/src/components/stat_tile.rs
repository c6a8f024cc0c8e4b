use yew::prelude::*;

use super::GlassCard;

#[derive(Properties, PartialEq)]
pub struct StatTileProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// Change indicator shown next to the value, e.g. "+12%"
    #[prop_or_default]
    pub trend: Option<AttrValue>,
    /// Solid accent tile instead of glass
    #[prop_or_default]
    pub highlight: bool,
}

#[function_component(StatTile)]
pub fn stat_tile(props: &StatTileProps) -> Html {
    let body = html! {
        <>
            <p class="stat-label">{ &props.label }</p>
            <div class="stat-row">
                <p class="stat-value">{ &props.value }</p>
                if let Some(trend) = &props.trend {
                    <span class="stat-trend">{ trend }</span>
                }
            </div>
        </>
    };

    if props.highlight {
        html! { <div class="stat-tile highlight">{ body }</div> }
    } else {
        html! { <GlassCard class={classes!("stat-tile")}>{ body }</GlassCard> }
    }
}
