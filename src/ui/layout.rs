use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::state::DashboardTab;

/// Centralized page layout: header row, tab strip, content, status bar
pub struct TuiLayout {
    pub header: Rect,
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

impl TuiLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            tab_bar: chunks[1],
            content: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Four equal columns for a metric-card row
pub fn card_grid(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area)
        .to_vec()
}

/// Overview chart row: ring chart takes 4/7, activity feed 3/7
pub fn overview_columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(57), Constraint::Percentage(43)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Analytics chart row: bar chart takes 2/3, line chart 1/3
pub fn analytics_columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Map a click column on the tab strip to the tab under it.
/// Mirrors how the Tabs widget lays titles out: one cell of padding on
/// each side of a title, one divider cell between titles.
pub fn tab_at_column(tab_bar: Rect, column: u16) -> Option<DashboardTab> {
    if tab_bar.width <= 2 {
        return None;
    }
    let inner_x = tab_bar.x + 1;
    if column < inner_x {
        return None;
    }

    let mut start = inner_x;
    for tab in DashboardTab::ALL {
        let width = tab.title().len() as u16 + 2;
        if column >= start && column < start + width {
            return Some(tab);
        }
        start += width + 1;
    }
    None
}
