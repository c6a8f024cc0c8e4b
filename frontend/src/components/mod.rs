mod activity_chart;
mod form_field;
mod glass_card;
mod layout;
mod stat_tile;

pub use activity_chart::ActivityChart;
pub use form_field::FormField;
pub use glass_card::GlassCard;
pub use layout::DashboardLayout;
pub use stat_tile::StatTile;
