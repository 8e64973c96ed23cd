use chrono::Weekday;
use colored::Color;
use onboard_core::{DashboardSnapshot, MetricCard};
use onboard_domain::{Layout, Theme};

use crate::cli::ui::formatting::Formatter;

const BAR_WIDTH: usize = 20;
const FULL_SCALE: usize = 100;

/// Renders a [`DashboardSnapshot`] as terminal lines.
pub struct DashboardRenderer {
    formatter: Formatter,
}

impl Default for DashboardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRenderer {
    pub fn new() -> Self {
        Self {
            formatter: Formatter::new(),
        }
    }

    pub fn with_formatter(formatter: Formatter) -> Self {
        Self { formatter }
    }

    pub fn print(&self, snapshot: &DashboardSnapshot) {
        for line in self.render(snapshot) {
            println!("{line}");
        }
    }

    pub fn render(&self, snapshot: &DashboardSnapshot) -> Vec<String> {
        let style = self.formatter.style();
        let accent = accent_for(snapshot.theme);
        let mut lines = vec![
            String::new(),
            self.formatter.header_text("Dashboard"),
            format!("Theme: {} | Layout: {}", snapshot.theme, snapshot.layout),
        ];

        lines.push(String::new());
        lines.push(style.apply_color("Profile", accent));
        let entries: Vec<(&str, &str)> = snapshot
            .profile
            .iter()
            .map(|line| (line.label, line.value.as_str()))
            .collect();
        lines.extend(self.formatter.two_column_lines(&entries));

        lines.push(String::new());
        lines.push(style.apply_color("Overview", accent));
        lines.extend(metric_lines(&snapshot.metrics, snapshot.layout));

        lines.push(String::new());
        lines.push(style.apply_color("Weekly Progress", accent));
        for point in &snapshot.weekly_progress {
            let bar = style.bar(usize::from(point.progress), FULL_SCALE, BAR_WIDTH);
            lines.push(format!(
                "  {}  {} {:>3}%",
                day_label(point.day),
                bar,
                point.progress
            ));
        }
        lines
    }
}

fn accent_for(theme: Theme) -> Option<Color> {
    match theme {
        Theme::Light => Some(Color::Blue),
        Theme::Dark => Some(Color::BrightMagenta),
    }
}

fn metric_lines(metrics: &[MetricCard], layout: Layout) -> Vec<String> {
    match layout {
        Layout::Grid => {
            let cells: Vec<String> = metrics
                .iter()
                .map(|card| format!("[ {}: {} ]", card.title, card.value))
                .collect();
            vec![format!("  {}", cells.join("  "))]
        }
        Layout::List => metrics
            .iter()
            .map(|card| format!("  - {}: {}", card.title, card.value))
            .collect(),
    }
}

fn day_label(day: Weekday) -> String {
    day.to_string()
}
