use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four dashboard tabs. Dispatch over this enum is exhaustive so an
/// unhandled panel cannot silently render nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    Overview,
    Analytics,
    Reports,
    Notifications,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Analytics,
        DashboardTab::Reports,
        DashboardTab::Notifications,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Analytics => "Analytics",
            DashboardTab::Reports => "Reports",
            DashboardTab::Notifications => "Notifications",
        }
    }

    pub fn index(self) -> usize {
        match self {
            DashboardTab::Overview => 0,
            DashboardTab::Analytics => 1,
            DashboardTab::Reports => 2,
            DashboardTab::Notifications => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<DashboardTab> {
        DashboardTab::ALL.get(index).copied()
    }

    pub fn next(self) -> DashboardTab {
        DashboardTab::ALL[(self.index() + 1) % DashboardTab::ALL.len()]
    }

    pub fn previous(self) -> DashboardTab {
        let count = DashboardTab::ALL.len();
        DashboardTab::ALL[(self.index() + count - 1) % count]
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for DashboardTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overview" => Ok(DashboardTab::Overview),
            "analytics" => Ok(DashboardTab::Analytics),
            "reports" => Ok(DashboardTab::Reports),
            "notifications" => Ok(DashboardTab::Notifications),
            other => Err(format!(
                "unknown tab '{other}' (expected overview, analytics, reports or notifications)"
            )),
        }
    }
}

/// All mutable UI state. Two cells from the original design plus the
/// focused analytics category, the keyboard/mouse analogue of chart hover.
/// Tab switches never touch the segment or category indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub selected_tab: DashboardTab,
    pub active_segment: usize,
    pub focused_category: usize,
}

impl DashboardState {
    pub fn new(start_tab: DashboardTab) -> Self {
        Self {
            selected_tab: start_tab,
            active_segment: 0,
            focused_category: 0,
        }
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.selected_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.selected_tab = self.selected_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.selected_tab = self.selected_tab.previous();
    }

    /// Set the active ring segment from a hover hit. Out-of-range hits
    /// are ignored so the index stays valid.
    pub fn hover_segment(&mut self, index: usize, segment_count: usize) {
        if index < segment_count {
            self.active_segment = index;
        }
    }

    pub fn next_segment(&mut self, segment_count: usize) {
        if segment_count > 0 {
            self.active_segment = (self.active_segment + 1) % segment_count;
        }
    }

    pub fn previous_segment(&mut self, segment_count: usize) {
        if segment_count > 0 {
            self.active_segment = (self.active_segment + segment_count - 1) % segment_count;
        }
    }

    pub fn focus_category(&mut self, index: usize, category_count: usize) {
        if index < category_count {
            self.focused_category = index;
        }
    }

    pub fn next_category(&mut self, category_count: usize) {
        if category_count > 0 {
            self.focused_category = (self.focused_category + 1) % category_count;
        }
    }

    pub fn previous_category(&mut self, category_count: usize) {
        if category_count > 0 {
            self.focused_category =
                (self.focused_category + category_count - 1) % category_count;
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DashboardTab::Overview)
    }
}
