//! Bar chart that grows in on mount, one bar after another.

use yew::prelude::*;

use super::GlassCard;

/// Stagger between consecutive bars.
const BAR_DELAY_MS: usize = 100;

/// Inline style for a bar: its final height and when it starts growing.
pub fn bar_style(index: usize, height_percent: u8) -> String {
    format!(
        "--bar-height: {}%; animation-delay: {}ms;",
        height_percent.min(100),
        index * BAR_DELAY_MS
    )
}

#[derive(Properties, PartialEq)]
pub struct ActivityChartProps {
    pub title: AttrValue,
    /// Bar heights in percent of the chart height
    pub values: Vec<u8>,
}

#[function_component(ActivityChart)]
pub fn activity_chart(props: &ActivityChartProps) -> Html {
    html! {
        <GlassCard class={classes!("activity-chart")}>
            <div class="chart-header">
                <h3>{ &props.title }</h3>
                <button class="chart-more">{ "View all ›" }</button>
            </div>
            <div class="chart-bars">
                {
                    props.values.iter().enumerate().map(|(i, h)| html! {
                        <div key={i.to_string()} class="chart-bar" style={bar_style(i, *h)}></div>
                    }).collect::<Html>()
                }
            </div>
        </GlassCard>
    }
}
