use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use super::{
    analytics, components,
    layout::{self, TuiLayout},
    overview,
    state::{DashboardState, DashboardTab},
};
use crate::charts::ring;
use crate::config::Config;
use crate::models::DashboardData;

/// Screen regions that respond to the mouse, captured during each draw
#[derive(Debug, Default, Clone, Copy)]
pub struct HitAreas {
    pub tab_bar: Option<Rect>,
    pub ring: Option<Rect>,
    pub bars: Option<Rect>,
    pub lines: Option<Rect>,
}

pub struct DashboardApp {
    pub data: DashboardData,
    pub state: DashboardState,
    pub config: Config,
    pub should_quit: bool,
    hit_areas: HitAreas,
}

impl DashboardApp {
    pub fn new(config: Config) -> Self {
        Self {
            data: DashboardData::demo(),
            state: DashboardState::new(config.start_tab),
            config,
            should_quit: false,
            hit_areas: HitAreas::default(),
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        self.hit_areas = HitAreas::default();
        let page = TuiLayout::new(f.area());

        self.render_header(f, page.header);
        self.render_tab_bar(f, page.tab_bar);
        self.hit_areas.tab_bar = Some(page.tab_bar);

        match self.state.selected_tab {
            DashboardTab::Overview => {
                overview::render(f, page.content, &self.data, &self.state, &mut self.hit_areas)
            }
            DashboardTab::Analytics => {
                analytics::render(f, page.content, &self.data, &self.state, &mut self.hit_areas)
            }
            DashboardTab::Reports => {
                components::render_placeholder_panel(f, page.content, "Reports")
            }
            DashboardTab::Notifications => {
                components::render_placeholder_panel(f, page.content, "Notifications")
            }
        }

        self.render_status_bar(f, page.status_bar);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(36)])
            .split(area);

        let title = Paragraph::new("📊 Dashboard")
            .block(Block::default().borders(Borders::ALL))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(title, columns[0]);

        // Placeholder action buttons, decorative only
        let buttons = Line::from(vec![
            Span::styled(
                " ⇓ Download ",
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
            Span::raw(" "),
            Span::styled(
                " 🔔 Notifications ",
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
        ]);
        let buttons = Paragraph::new(buttons).block(Block::default().borders(Borders::ALL));
        f.render_widget(buttons, columns[1]);
    }

    fn render_tab_bar(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<&str> = DashboardTab::ALL.iter().map(|t| t.title()).collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Asset Inventory Management"),
            )
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .select(self.state.selected_tab.index());

        f.render_widget(tabs, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = vec![Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Tab",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to switch views • ", Style::default().fg(Color::Gray)),
            Span::styled(
                "←/→",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to inspect charts • ", Style::default().fg(Color::Gray)),
            Span::styled(
                "1-4",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to jump • ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ])];

        let paragraph = Paragraph::new(status_text)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));

        f.render_widget(paragraph, area);
    }

    pub fn handle_key_event(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.state.next_tab();
            }
            KeyCode::BackTab => {
                self.state.previous_tab();
            }
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(tab) = DashboardTab::from_index(c as usize - '1' as usize) {
                    self.state.select_tab(tab);
                }
            }
            KeyCode::Left => match self.state.selected_tab {
                DashboardTab::Overview => {
                    self.state.previous_segment(self.data.distribution.len())
                }
                DashboardTab::Analytics => self.state.previous_category(self.data.monthly.len()),
                _ => {}
            },
            KeyCode::Right => match self.state.selected_tab {
                DashboardTab::Overview => self.state.next_segment(self.data.distribution.len()),
                DashboardTab::Analytics => self.state.next_category(self.data.monthly.len()),
                _ => {}
            },
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(ring_area) = self.hit_areas.ring {
                    if ring_area.contains(position) {
                        if let Some(index) =
                            ring::segment_at(ring_area, mouse.column, mouse.row, &self.data.distribution)
                        {
                            self.state.hover_segment(index, self.data.distribution.len());
                        }
                        return;
                    }
                }
                for chart_area in [self.hit_areas.bars, self.hit_areas.lines].into_iter().flatten() {
                    if chart_area.contains(position) {
                        if let Some(index) =
                            category_at(chart_area, mouse.column, self.data.monthly.len())
                        {
                            self.state.focus_category(index, self.data.monthly.len());
                        }
                        return;
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(tab_bar) = self.hit_areas.tab_bar {
                    if tab_bar.contains(position) {
                        if let Some(tab) = layout::tab_at_column(tab_bar, mouse.column) {
                            self.state.select_tab(tab);
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

/// Map a column within a chart widget to the category under it
fn category_at(area: Rect, column: u16, category_count: usize) -> Option<usize> {
    if area.width <= 2 || category_count == 0 {
        return None;
    }
    let inner_x = area.x + 1;
    let inner_width = area.width - 2;
    if column < inner_x || column >= inner_x + inner_width {
        return None;
    }

    let index = (column - inner_x) as usize * category_count / inner_width as usize;
    Some(index.min(category_count - 1))
}

/// Run the main TUI application
pub fn run_app(config: Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    if config.mouse_capture {
        io::stdout().execute(EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let tick = Duration::from_millis(config.tick_ms);
    let mouse_capture = config.mouse_capture;
    let mut app = DashboardApp::new(config);

    // Main application loop
    let result = loop {
        if let Err(e) = terminal.draw(|f| app.draw(f)) {
            break Err(e.into());
        }

        match event::poll(tick) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key.code)
                }
                Ok(Event::Mouse(mouse)) => app.handle_mouse_event(mouse),
                Ok(_) => {}
                Err(e) => break Err(e.into()),
            },
            Ok(false) => {} // Tick, redraw only
            Err(e) => break Err(e.into()),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Cleanup terminal
    disable_raw_mode()?;
    if mouse_capture {
        io::stdout().execute(DisableMouseCapture)?;
    }
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_app() -> DashboardApp {
        DashboardApp::new(Config::default())
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let mut app = test_app();

        app.handle_key_event(KeyCode::Char('2'));
        assert_eq!(app.state.selected_tab, DashboardTab::Analytics);
        app.handle_key_event(KeyCode::Char('4'));
        assert_eq!(app.state.selected_tab, DashboardTab::Notifications);
        app.handle_key_event(KeyCode::Char('1'));
        assert_eq!(app.state.selected_tab, DashboardTab::Overview);
    }

    #[test]
    fn test_arrows_rotate_segment_on_overview_only() {
        let mut app = test_app();

        app.handle_key_event(KeyCode::Right);
        assert_eq!(app.state.active_segment, 1);

        app.handle_key_event(KeyCode::Char('3'));
        app.handle_key_event(KeyCode::Right);
        assert_eq!(app.state.active_segment, 1);

        app.handle_key_event(KeyCode::Char('2'));
        app.handle_key_event(KeyCode::Right);
        assert_eq!(app.state.focused_category, 1);
        assert_eq!(app.state.active_segment, 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        app.handle_key_event(KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = test_app();
        app.handle_key_event(KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_category_at_maps_columns_to_buckets() {
        let area = Rect::new(0, 0, 52, 12);

        assert_eq!(category_at(area, 1, 5), Some(0));
        assert_eq!(category_at(area, 26, 5), Some(2));
        assert_eq!(category_at(area, 50, 5), Some(4));
        assert_eq!(category_at(area, 0, 5), None);
        assert_eq!(category_at(area, 51, 5), None);
    }
}
