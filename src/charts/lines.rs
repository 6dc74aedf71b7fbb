//! Weekly usage-trend line chart: in-use and in-maintenance series over
//! the same week categories, with the in-use point under focus highlighted.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::models::WeeklyUsage;

pub const IN_USE_COLOR: Color = Color::LightMagenta;
pub const MAINTENANCE_COLOR: Color = Color::LightGreen;

pub fn render_usage_chart(f: &mut Frame, area: Rect, weekly: &[WeeklyUsage], focused: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("📉 Asset Usage Trends");
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 4 || weekly.is_empty() {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Chart
            Constraint::Length(1), // Tooltip
        ])
        .split(inner);

    let in_use_points: Vec<(f64, f64)> = weekly
        .iter()
        .enumerate()
        .map(|(i, w)| (i as f64, w.in_use as f64))
        .collect();
    let maintenance_points: Vec<(f64, f64)> = weekly
        .iter()
        .enumerate()
        .map(|(i, w)| (i as f64, w.maintenance as f64))
        .collect();
    let focus_point = [in_use_points[focused.min(weekly.len() - 1)]];

    let y_max = weekly
        .iter()
        .map(|w| w.in_use.max(w.maintenance))
        .max()
        .unwrap_or(0) as f64
        * 1.1;

    let datasets = vec![
        Dataset::default()
            .name("In Use")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(IN_USE_COLOR))
            .data(&in_use_points),
        Dataset::default()
            .name("In Maintenance")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(MAINTENANCE_COLOR))
            .data(&maintenance_points),
        // Focused point on the in-use series, kept out of the legend
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .data(&focus_point),
    ];

    let x_labels = vec![
        Span::styled(weekly[0].week.clone(), Style::default().fg(Color::Gray)),
        Span::styled(
            weekly[weekly.len() / 2].week.clone(),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            weekly[weekly.len() - 1].week.clone(),
            Style::default().fg(Color::Gray),
        ),
    ];
    let y_labels = vec![
        Span::styled("0", Style::default().fg(Color::Gray)),
        Span::styled(format!("{:.0}", y_max / 2.0), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:.0}", y_max), Style::default().fg(Color::Gray)),
    ];

    let chart = Chart::new(datasets)
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(x_labels)
                .bounds([0.0, (weekly.len() - 1) as f64]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(y_labels)
                .bounds([0.0, y_max]),
        );
    f.render_widget(chart, rows[0]);

    if let Some(week) = weekly.get(focused) {
        let tooltip = Line::from(vec![
            Span::styled(
                week.week.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · In Use: ", Style::default().fg(Color::Gray)),
            Span::styled(week.in_use.to_string(), Style::default().fg(IN_USE_COLOR)),
            Span::styled(" · Maintenance: ", Style::default().fg(Color::Gray)),
            Span::styled(
                week.maintenance.to_string(),
                Style::default().fg(MAINTENANCE_COLOR),
            ),
        ]);
        f.render_widget(Paragraph::new(tooltip), rows[1]);
    }
}
