//! Dual-axis grouped bar chart: assets acquired per month against the left
//! axis, acquisition cost against the right axis, shared month categories.
//!
//! A terminal bar chart has one implicit value scale, so each series is
//! normalized against its own axis maximum before it reaches the widget;
//! the printed bar values stay in real units.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::models::MonthlyAcquisition;
use crate::ui::components::format_thousands;

pub const ACQUIRED_COLOR: Color = Color::LightMagenta;
pub const COST_COLOR: Color = Color::LightGreen;

/// Common height both series are normalized to
const AXIS_SCALE: u64 = 100;

/// Normalize a value against its axis maximum
fn scaled(value: u64, axis_max: u64) -> u64 {
    if axis_max == 0 {
        return 0;
    }
    value * AXIS_SCALE / axis_max
}

/// Render the acquisition-vs-cost chart with a legend row above and a
/// tooltip row for the focused month below.
pub fn render_acquisition_chart(
    f: &mut Frame,
    area: Rect,
    monthly: &[MonthlyAcquisition],
    focused: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("▦ Monthly Asset Acquisition vs Cost");
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 4 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Legend
            Constraint::Min(0),    // Bars
            Constraint::Length(1), // Tooltip
        ])
        .split(inner);

    let legend = Line::from(vec![
        Span::styled("■ Assets Acquired", Style::default().fg(ACQUIRED_COLOR)),
        Span::styled(" (left axis)", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("■ Cost ($)", Style::default().fg(COST_COLOR)),
        Span::styled(" (right axis)", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(ratatui::widgets::Paragraph::new(legend), rows[0]);

    let left_max = monthly.iter().map(|m| m.acquired).max().unwrap_or(0);
    let right_max = monthly.iter().map(|m| m.cost).max().unwrap_or(0);

    let mut chart = BarChart::default().bar_width(4).bar_gap(1).group_gap(2);
    for (i, month) in monthly.iter().enumerate() {
        let label_style = if i == focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let acquired_bar = Bar::default()
            .value(scaled(month.acquired, left_max))
            .text_value(month.acquired.to_string())
            .style(Style::default().fg(ACQUIRED_COLOR))
            .value_style(Style::default().fg(Color::Black).bg(ACQUIRED_COLOR));
        let cost_bar = Bar::default()
            .value(scaled(month.cost, right_max))
            .text_value(month.cost.to_string())
            .style(Style::default().fg(COST_COLOR))
            .value_style(Style::default().fg(Color::Black).bg(COST_COLOR));

        chart = chart.data(
            BarGroup::default()
                .label(Line::from(Span::styled(month.month.clone(), label_style)))
                .bars(&[acquired_bar, cost_bar]),
        );
    }
    f.render_widget(chart, rows[1]);

    if let Some(month) = monthly.get(focused) {
        let tooltip = Line::from(vec![
            Span::styled(
                month.month.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · Assets Acquired: ", Style::default().fg(Color::Gray)),
            Span::styled(month.acquired.to_string(), Style::default().fg(ACQUIRED_COLOR)),
            Span::styled(" · Cost: $", Style::default().fg(Color::Gray)),
            Span::styled(format_thousands(month.cost), Style::default().fg(COST_COLOR)),
        ]);
        f.render_widget(ratatui::widgets::Paragraph::new(tooltip), rows[2]);
    }
}
