//! Static analytics rows and the derivations the report views need.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReport {
    pub period: String,
    pub total_jobs: u32,
    pub completed_jobs: u32,
    pub revenue: u32,
    pub avg_response_hours: f64,
    pub customer_satisfaction: f64,
}

impl PeriodReport {
    /// Completed jobs as a rounded percentage of the total. Zero when the
    /// period has no jobs at all.
    pub fn completion_rate(&self) -> u32 {
        if self.total_jobs == 0 {
            return 0;
        }
        ((self.completed_jobs as f64 / self.total_jobs as f64) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReport {
    pub category: String,
    pub jobs: u32,
    pub revenue: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianPerformance {
    pub name: String,
    pub jobs: u32,
    pub rating: f64,
    pub revenue: u32,
}

/// A category's job count as a percentage of the busiest category, used to
/// size the report bars. 0.0 when the list is empty.
pub fn category_share(categories: &[CategoryReport], jobs: u32) -> f64 {
    let max = categories.iter().map(|c| c.jobs).max().unwrap_or(0);
    if max == 0 {
        return 0.0;
    }
    (jobs as f64 / max as f64) * 100.0
}

/// The report payload served and printed as one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportBundle {
    pub periods: Vec<PeriodReport>,
    pub categories: Vec<CategoryReport>,
    pub performance: Vec<TechnicianPerformance>,
}

impl ReportBundle {
    /// Most recent period, if any. Fixtures are ordered newest first.
    pub fn current_period(&self) -> Option<&PeriodReport> {
        self.periods.first()
    }
}
