//! Analytics tab: acquisition-vs-cost bars, usage-trend lines, and the
//! efficiency cards.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::app::HitAreas;
use super::components::render_metric_card;
use super::layout::{analytics_columns, card_grid};
use super::state::DashboardState;
use crate::charts::{bars, lines};
use crate::models::DashboardData;

pub fn render(
    f: &mut Frame,
    area: Rect,
    data: &DashboardData,
    state: &DashboardState,
    hit_areas: &mut HitAreas,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Charts
            Constraint::Length(5), // Efficiency cards
        ])
        .split(area);

    let (bars_area, lines_area) = analytics_columns(rows[0]);
    bars::render_acquisition_chart(f, bars_area, &data.monthly, state.focused_category);
    lines::render_usage_chart(f, lines_area, &data.weekly, state.focused_category);
    hit_areas.bars = Some(bars_area);
    hit_areas.lines = Some(lines_area);

    for (rect, card) in card_grid(rows[1]).iter().zip(&data.efficiency_cards) {
        render_metric_card(f, *rect, card);
    }
}
