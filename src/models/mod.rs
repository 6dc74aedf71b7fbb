use chrono::{DateTime, Duration, Utc};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// One slice of the asset distribution ring chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub name: String,
    pub value: u64,
    #[serde(skip)]
    pub color: Color,
}

/// Assets acquired and money spent in one month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAcquisition {
    pub month: String,
    pub acquired: u64,
    pub cost: u64,
}

/// Weekly in-use vs in-maintenance counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyUsage {
    pub week: String,
    pub in_use: u64,
    pub maintenance: u64,
}

/// A headline metric card (overview and efficiency variants share the shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricCard {
    pub title: String,
    pub glyph: String,
    pub headline: String,
    pub caption: String,
    #[serde(skip)]
    pub accent: Color,
}

impl MetricCard {
    pub fn new(title: &str, glyph: &str, headline: &str, caption: &str, accent: Color) -> Self {
        Self {
            title: title.to_string(),
            glyph: glyph.to_string(),
            headline: headline.to_string(),
            caption: caption.to_string(),
            accent,
        }
    }
}

/// One entry in the recent-activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub glyph: String,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

/// Everything the dashboard renders. Built once at startup and never mutated;
/// the card headlines are independent literals, not derived from the datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub distribution: Vec<DistributionSlice>,
    pub monthly: Vec<MonthlyAcquisition>,
    pub weekly: Vec<WeeklyUsage>,
    pub overview_cards: Vec<MetricCard>,
    pub efficiency_cards: Vec<MetricCard>,
    pub activities: Vec<ActivityEntry>,
}

impl DashboardData {
    /// Demo dataset shipped with the dashboard
    pub fn demo() -> Self {
        let now = Utc::now();

        let distribution = vec![
            DistributionSlice {
                name: "In Use".to_string(),
                value: 400,
                color: Color::Blue,
            },
            DistributionSlice {
                name: "In Stock".to_string(),
                value: 300,
                color: Color::Green,
            },
            DistributionSlice {
                name: "Maintenance".to_string(),
                value: 100,
                color: Color::Yellow,
            },
            DistributionSlice {
                name: "Retired".to_string(),
                value: 200,
                color: Color::LightRed,
            },
        ];

        let monthly = vec![
            MonthlyAcquisition { month: "Jan".to_string(), acquired: 400, cost: 2400 },
            MonthlyAcquisition { month: "Feb".to_string(), acquired: 300, cost: 1398 },
            MonthlyAcquisition { month: "Mar".to_string(), acquired: 200, cost: 9800 },
            MonthlyAcquisition { month: "Apr".to_string(), acquired: 278, cost: 3908 },
            MonthlyAcquisition { month: "May".to_string(), acquired: 189, cost: 4800 },
        ];

        let weekly = vec![
            WeeklyUsage { week: "Week 1".to_string(), in_use: 400, maintenance: 240 },
            WeeklyUsage { week: "Week 2".to_string(), in_use: 300, maintenance: 139 },
            WeeklyUsage { week: "Week 3".to_string(), in_use: 200, maintenance: 980 },
            WeeklyUsage { week: "Week 4".to_string(), in_use: 278, maintenance: 390 },
            WeeklyUsage { week: "Week 5".to_string(), in_use: 189, maintenance: 480 },
        ];

        let overview_cards = vec![
            MetricCard::new(
                "Total Assets",
                "🖴",
                "1,000",
                "+20.1% from last month",
                Color::Blue,
            ),
            MetricCard::new(
                "Maintenance Alerts",
                "⚠",
                "15",
                "+2 new alerts today",
                Color::Yellow,
            ),
            MetricCard::new(
                "Compliance",
                "🛡",
                "98.5%",
                "+0.5% from last week",
                Color::Green,
            ),
            MetricCard::new(
                "Total Cost",
                "💲",
                "$24,500",
                "+15% from last quarter",
                Color::Magenta,
            ),
        ];

        let efficiency_cards = vec![
            MetricCard::new(
                "Asset Utilization",
                "📈",
                "87.4%",
                "+2.4% from last month",
                Color::DarkGray,
            ),
            MetricCard::new(
                "Maintenance Efficiency",
                "⚡",
                "92.1%",
                "+1.2% from last quarter",
                Color::DarkGray,
            ),
            MetricCard::new(
                "Cost per Asset",
                "💲",
                "$245",
                "-5.1% from last year",
                Color::DarkGray,
            ),
            MetricCard::new(
                "Asset Lifespan",
                "📋",
                "4.7 years",
                "+0.3 years from last assessment",
                Color::DarkGray,
            ),
        ];

        let activities = vec![
            ActivityEntry {
                glyph: "🆕".to_string(),
                message: "New asset added: Police Radio".to_string(),
                occurred_at: now - Duration::minutes(2),
            },
            ActivityEntry {
                glyph: "⚠".to_string(),
                message: "Maintenance alert: Vehicle #1234".to_string(),
                occurred_at: now - Duration::hours(1),
            },
            ActivityEntry {
                glyph: "👤".to_string(),
                message: "Asset assigned: Body Camera to Officer Smith".to_string(),
                occurred_at: now - Duration::hours(3),
            },
        ];

        Self {
            distribution,
            monthly,
            weekly,
            overview_cards,
            efficiency_cards,
            activities,
        }
    }

    /// Sum of all distribution slice values
    pub fn distribution_total(&self) -> u64 {
        self.distribution.iter().map(|s| s.value).sum()
    }
}
