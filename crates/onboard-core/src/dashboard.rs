//! Read-only view model for the post-onboarding dashboard.

use chrono::Weekday;
use onboard_domain::{Field, Layout, ProfileDraft, Theme};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressPoint {
    pub day: Weekday,
    pub progress: u8,
}

/// Everything the dashboard renders. Metrics and progress are sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub profile: Vec<ProfileLine>,
    pub theme: Theme,
    pub layout: Layout,
    pub metrics: Vec<MetricCard>,
    pub weekly_progress: Vec<ProgressPoint>,
}

const SAMPLE_METRICS: [MetricCard; 3] = [
    MetricCard {
        title: "Team Members",
        value: 42,
    },
    MetricCard {
        title: "Active Projects",
        value: 8,
    },
    MetricCard {
        title: "Notifications",
        value: 15,
    },
];

const SAMPLE_PROGRESS: [u8; 7] = [30, 45, 60, 50, 70, 85, 90];

impl DashboardSnapshot {
    /// Builds the dashboard for a submitted profile, or for none at all when the
    /// dashboard is opened directly. Without a profile no grid was chosen, so
    /// the cards stack one per line.
    pub fn from_profile(profile: Option<&ProfileDraft>) -> Self {
        let value_of = |field: Field| {
            profile
                .map(|draft| draft.get(field))
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };
        let line = |label: &'static str, field: Field| ProfileLine {
            label,
            value: value_of(field),
        };

        let lines = vec![
            line("Name", Field::Name),
            line("Email", Field::Email),
            line("Company", Field::CompanyName),
            line("Industry", Field::Industry),
            line("Company Size", Field::Size),
            line("Theme", Field::Theme),
            line("Layout", Field::Layout),
        ];

        let mut day = Weekday::Mon;
        let mut weekly_progress = Vec::with_capacity(SAMPLE_PROGRESS.len());
        for progress in SAMPLE_PROGRESS {
            weekly_progress.push(ProgressPoint { day, progress });
            day = day.succ();
        }

        Self {
            profile: lines,
            theme: profile.map(ProfileDraft::theme).unwrap_or_default(),
            layout: profile.map_or(Layout::List, ProfileDraft::layout),
            metrics: SAMPLE_METRICS.to_vec(),
            weekly_progress,
        }
    }

    pub fn max_progress(&self) -> u8 {
        self.weekly_progress
            .iter()
            .map(|point| point.progress)
            .max()
            .unwrap_or(0)
    }
}
