/// Shared UI components and formatting helpers for the dashboard
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::MetricCard;

/// Format a count with thousands separators ("1000" -> "1,000")
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Style for a trend caption: leading '+' is good, leading '-' is bad
pub fn trend_style(caption: &str) -> Style {
    match caption.chars().next() {
        Some('+') => Style::default().fg(Color::Green),
        Some('-') => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Gray),
    }
}

/// Human-readable age of a timestamp ("2 minutes ago")
pub fn relative_time(occurred_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(occurred_at);

    let minutes = delta.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{} minute{} ago", minutes, if minutes == 1 { "" } else { "s" });
    }

    let hours = delta.num_hours();
    if hours < 24 {
        return format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" });
    }

    let days = delta.num_days();
    format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
}

/// Render one metric card: accent-colored title and glyph, bold headline,
/// trend-colored caption
pub fn render_metric_card(f: &mut Frame, area: Rect, card: &MetricCard) {
    let title = Line::from(Span::styled(
        format!("{} {}", card.glyph, card.title),
        Style::default().fg(card.accent),
    ));

    let body = vec![
        Line::from(Span::styled(
            card.headline.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.caption.clone(), trend_style(&card.caption))),
    ];

    let paragraph = Paragraph::new(body).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(card.accent))
            .title(title),
    );
    f.render_widget(paragraph, area);
}

/// Explicit placeholder for tabs that have no content in this version
pub fn render_placeholder_panel(f: &mut Frame, area: Rect, tab_title: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("🚧 {}: not yet implemented", tab_title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This panel has no content in this version.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(tab_title.to_string()));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(15), "15");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(24_500), "24,500");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_trend_style_direction() {
        assert_eq!(trend_style("+20.1% from last month").fg, Some(Color::Green));
        assert_eq!(trend_style("-5.1% from last year").fg, Some(Color::Red));
        assert_eq!(trend_style("unchanged").fg, Some(Color::Gray));
    }

    #[test]
    fn test_relative_time() {
        let now = Utc::now();
        assert_eq!(relative_time(now - Duration::seconds(20), now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(2), now), "2 minutes ago");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(relative_time(now - Duration::days(2), now), "2 days ago");
    }
}
