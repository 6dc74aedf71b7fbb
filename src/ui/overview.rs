//! Overview tab: summary cards, the asset-distribution ring chart, and
//! the recent-activity feed.

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::app::HitAreas;
use super::components::{self, render_metric_card};
use super::layout::{card_grid, overview_columns};
use super::state::DashboardState;
use crate::charts::ring;
use crate::models::{ActivityEntry, DashboardData};

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
            Constraint::Length(5), // Summary cards
            Constraint::Min(0),    // Ring chart and activity feed
        ])
        .split(area);

    for (rect, card) in card_grid(rows[0]).iter().zip(&data.overview_cards) {
        render_metric_card(f, *rect, card);
    }

    let (ring_area, feed_area) = overview_columns(rows[1]);
    ring::render_distribution_chart(f, ring_area, &data.distribution, state.active_segment);
    hit_areas.ring = Some(ring_area);

    render_activity_feed(f, feed_area, &data.activities);
}

fn render_activity_feed(f: &mut Frame, area: Rect, activities: &[ActivityEntry]) {
    let now = Utc::now();
    let items: Vec<ListItem> = activities
        .iter()
        .map(|activity| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(format!("{} ", activity.glyph)),
                    Span::styled(
                        activity.message.clone(),
                        Style::default().fg(Color::White),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("   {}", components::relative_time(activity.occurred_at, now)),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("🕘 Recent Activities"),
    );
    f.render_widget(list, area);
}
