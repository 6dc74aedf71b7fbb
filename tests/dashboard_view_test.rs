//! End-to-end rendering tests: mount the dashboard on a test backend and
//! assert on the text that actually reaches the screen.

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, Terminal};
use test_log::test;

use asset_dashboard::config::Config;
use asset_dashboard::ui::app::DashboardApp;
use asset_dashboard::ui::state::DashboardTab;

const WIDTH: u16 = 110;
const HEIGHT: u16 = 40;

fn draw_to_text(app: &mut DashboardApp) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();

    let buffer = terminal.backend().buffer().clone();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn test_app() -> DashboardApp {
    DashboardApp::new(Config::default())
}

#[test]
fn test_mount_shows_overview_with_default_state() {
    let mut app = test_app();
    let screen = draw_to_text(&mut app);

    assert_eq!(app.state.selected_tab, DashboardTab::Overview);
    assert_eq!(app.state.active_segment, 0);

    // The four summary-card literals
    assert!(screen.contains("Total Assets"), "missing card title");
    assert!(screen.contains("1,000"));
    assert!(screen.contains("Maintenance Alerts"));
    assert!(screen.contains("15"));
    assert!(screen.contains("98.5%"));
    assert!(screen.contains("$24,500"));

    // Ring chart with segment 0 expanded: name, raw value, percentage
    assert!(screen.contains("Asset Distribution"));
    assert!(screen.contains("In Use"));
    assert!(screen.contains("Value 400"));
    assert!(screen.contains("(40.00%)"));

    // Activity feed
    assert!(screen.contains("Recent Activities"));
    assert!(screen.contains("New asset added: Police Radio"));
    assert!(screen.contains("2 minutes ago"));
    assert!(screen.contains("Maintenance alert: Vehicle #1234"));
    assert!(screen.contains("1 hour ago"));

    // Analytics content must not leak into the overview
    assert!(!screen.contains("87.4%"));
    assert!(!screen.contains("Asset Utilization"));
}

#[test]
fn test_analytics_tab_shows_charts_and_efficiency_cards() {
    let mut app = test_app();
    app.handle_key_event(KeyCode::Char('2'));
    let screen = draw_to_text(&mut app);

    assert_eq!(app.state.selected_tab, DashboardTab::Analytics);

    // Efficiency-card literals
    assert!(screen.contains("87.4%"));
    assert!(screen.contains("92.1%"));
    assert!(screen.contains("$245"));
    assert!(screen.contains("4.7 years"));

    // Bar chart: all five month categories and both series
    for month in ["Jan", "Feb", "Mar", "Apr", "May"] {
        assert!(screen.contains(month), "missing month {month}");
    }
    assert!(screen.contains("Assets Acquired"));
    assert!(screen.contains("Cost ($)"));
    assert!(screen.contains("9800"), "cost bar for Mar not rendered");

    // Line chart axis labels and legend
    assert!(screen.contains("Week 1"));
    assert!(screen.contains("Week 5"));
    assert!(screen.contains("In Maintenance"));

    // Overview cards are gone
    assert!(!screen.contains("Total Assets"));
    assert!(!screen.contains("1,000"));
}

#[test]
fn test_focused_category_drives_the_tooltips() {
    let mut app = test_app();
    app.handle_key_event(KeyCode::Char('2'));

    // Default focus is the first category
    let screen = draw_to_text(&mut app);
    assert!(screen.contains("Jan · Assets Acquired: 400 · Cost: $2,400"));
    assert!(screen.contains("Week 1 · In Use: 400 · Maintenance: 240"));

    // Two steps right lands on March / Week 3
    app.handle_key_event(KeyCode::Right);
    app.handle_key_event(KeyCode::Right);
    let screen = draw_to_text(&mut app);
    assert!(screen.contains("Mar · Assets Acquired: 200 · Cost: $9,800"));
    assert!(screen.contains("Week 3 · In Use: 200 · Maintenance: 980"));
}

#[test]
fn test_empty_tabs_render_explicit_placeholders() {
    let mut app = test_app();

    app.handle_key_event(KeyCode::Char('3'));
    let screen = draw_to_text(&mut app);
    assert!(screen.contains("Reports: not yet implemented"));
    assert!(screen.contains("This panel has no content in this version."));

    app.handle_key_event(KeyCode::Char('4'));
    let screen = draw_to_text(&mut app);
    assert!(screen.contains("Notifications: not yet implemented"));
}

#[test]
fn test_tab_switch_preserves_active_segment() {
    let mut app = test_app();

    // Hover to the second segment, bounce through Analytics and back
    app.handle_key_event(KeyCode::Right);
    assert_eq!(app.state.active_segment, 1);

    app.handle_key_event(KeyCode::Char('2'));
    draw_to_text(&mut app);
    app.handle_key_event(KeyCode::Char('1'));
    let screen = draw_to_text(&mut app);

    assert_eq!(app.state.active_segment, 1);
    assert!(screen.contains("In Stock"));
    assert!(screen.contains("Value 300"));
    assert!(screen.contains("(30.00%)"));
}

#[test]
fn test_every_segment_reports_its_percentage() {
    let mut app = test_app();
    let expected = ["(40.00%)", "(30.00%)", "(10.00%)", "(20.00%)"];

    for percent in expected {
        let screen = draw_to_text(&mut app);
        assert!(screen.contains(percent), "missing {percent}");
        app.handle_key_event(KeyCode::Right);
    }
}

#[test]
fn test_tab_key_cycles_through_all_panels() {
    let mut app = test_app();

    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(app.state.selected_tab);
        app.handle_key_event(KeyCode::Tab);
    }

    assert_eq!(
        seen,
        vec![
            DashboardTab::Overview,
            DashboardTab::Analytics,
            DashboardTab::Reports,
            DashboardTab::Notifications,
        ]
    );
    assert_eq!(app.state.selected_tab, DashboardTab::Overview);
}
