//! Keyword-scored triage for free-text issue descriptions.
//!
//! Classification is a pure function over the description text: the category
//! with the most keyword hits wins, severity and urgency come from their own
//! keyword tables, and the result carries the recommended tools, parts,
//! safety notes, duration estimate, and next steps for that category.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Leak,
    Clog,
    WaterHeater,
    Faucet,
    Toilet,
    Drain,
    Pipe,
    Sewer,
    GarbageDisposal,
    WaterPressure,
    Other,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Leak => "leak",
            IssueCategory::Clog => "clog",
            IssueCategory::WaterHeater => "water_heater",
            IssueCategory::Faucet => "faucet",
            IssueCategory::Toilet => "toilet",
            IssueCategory::Drain => "drain",
            IssueCategory::Pipe => "pipe",
            IssueCategory::Sewer => "sewer",
            IssueCategory::GarbageDisposal => "garbage_disposal",
            IssueCategory::WaterPressure => "water_pressure",
            IssueCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Triage severity scale. One level wider than the job records' scale:
/// `Critical` exists so intake can flag flood-grade issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IssueSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueSeverity::Low => "low",
            IssueSeverity::Medium => "medium",
            IssueSeverity::High => "high",
            IssueSeverity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueUrgency {
    Low,
    Medium,
    High,
    Emergency,
}

impl IssueUrgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueUrgency::Low => "low",
            IssueUrgency::Medium => "medium",
            IssueUrgency::High => "high",
            IssueUrgency::Emergency => "emergency",
        }
    }
}

impl std::fmt::Display for IssueUrgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full triage result for one issue description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub category: IssueCategory,
    /// Winning category's share of all keyword hits; 0.0 when nothing
    /// matched and the category fell through to `Other`.
    pub confidence: f64,
    pub severity: IssueSeverity,
    pub urgency: IssueUrgency,
    pub estimated_duration: String,
    pub required_tools: Vec<String>,
    pub recommended_parts: Vec<String>,
    pub safety_notes: Vec<String>,
    pub next_steps: Vec<String>,
}

const CATEGORY_KEYWORDS: [(IssueCategory, &[&str]); 10] = [
    (
        IssueCategory::Leak,
        &["leak", "drip", "water", "wet", "moisture", "puddle"],
    ),
    (
        IssueCategory::Clog,
        &["clog", "blocked", "slow drain", "backup", "overflow"],
    ),
    (
        IssueCategory::WaterHeater,
        &["hot water", "heater", "warm", "temperature", "heating"],
    ),
    (
        IssueCategory::Faucet,
        &["faucet", "tap", "handle", "spout", "aerator"],
    ),
    (
        IssueCategory::Toilet,
        &["toilet", "flush", "bowl", "tank", "seat"],
    ),
    (
        IssueCategory::Drain,
        &["drain", "sink", "tub", "shower", "basin"],
    ),
    (
        IssueCategory::Pipe,
        &["pipe", "fitting", "joint", "connection", "line"],
    ),
    (
        IssueCategory::Sewer,
        &["sewer", "main line", "septic", "backup", "smell"],
    ),
    (
        IssueCategory::GarbageDisposal,
        &["disposal", "grinder", "garbage", "food waste"],
    ),
    (
        IssueCategory::WaterPressure,
        &["pressure", "low flow", "weak", "strong", "force"],
    ),
];

// First table entry with any hit wins, so narrow scales list mild terms
// before severe ones.
const SEVERITY_KEYWORDS: [(IssueSeverity, &[&str]); 4] = [
    (
        IssueSeverity::Low,
        &["slow", "minor", "small", "slight", "drip"],
    ),
    (
        IssueSeverity::Medium,
        &["moderate", "medium", "noticeable", "consistent"],
    ),
    (
        IssueSeverity::High,
        &["major", "significant", "serious", "bad", "severe"],
    ),
    (
        IssueSeverity::Critical,
        &["emergency", "flooding", "burst", "overflow", "urgent", "critical"],
    ),
];

const URGENCY_KEYWORDS: [(IssueUrgency, &[&str]); 4] = [
    (
        IssueUrgency::Low,
        &["when convenient", "no rush", "sometime", "non-urgent"],
    ),
    (IssueUrgency::Medium, &["soon", "asap", "quickly", "prompt"]),
    (
        IssueUrgency::High,
        &["urgent", "immediate", "right away", "emergency"],
    ),
    (
        IssueUrgency::Emergency,
        &["emergency", "flooding", "burst", "overflow", "urgent", "critical", "now"],
    ),
];

pub fn classify_issue(description: &str) -> Classification {
    let text = normalize(description);

    let (category, confidence) = score_category(&text);
    let severity = first_match(&SEVERITY_KEYWORDS, &text).unwrap_or(IssueSeverity::Medium);
    let urgency = first_match(&URGENCY_KEYWORDS, &text).unwrap_or(IssueUrgency::Medium);

    let (tools, parts, safety_notes, duration) = recommendations(category);

    Classification {
        category,
        confidence,
        severity,
        urgency,
        estimated_duration: duration.to_string(),
        required_tools: to_strings(tools),
        recommended_parts: to_strings(parts),
        safety_notes: to_strings(safety_notes),
        next_steps: next_steps(category, severity, urgency),
    }
}

/// Lowercase, strip punctuation to spaces, collapse whitespace. Multi-word
/// keywords rely on the single-space normalization.
fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn score_category(text: &str) -> (IssueCategory, f64) {
    let mut best = IssueCategory::Other;
    let mut best_score = 0usize;
    let mut total = 0usize;

    for (category, keywords) in CATEGORY_KEYWORDS {
        let score = keywords.iter().filter(|k| text.contains(*k)).count();
        total += score;
        if score > best_score {
            best = category;
            best_score = score;
        }
    }

    if total == 0 {
        (IssueCategory::Other, 0.0)
    } else {
        (best, best_score as f64 / total as f64)
    }
}

fn first_match<T: Copy>(table: &[(T, &[&str])], text: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(value, _)| *value)
}

type Recommendations = (
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
    &'static str,
);

fn recommendations(category: IssueCategory) -> Recommendations {
    match category {
        IssueCategory::Leak => (
            &["pipe wrench", "plumber's tape", "soldering torch", "pipe cutter"],
            &["pipe fittings", "soldering materials", "pipe sections"],
            &[
                "Turn off water supply before repairs",
                "Check for electrical hazards near water",
            ],
            "1-3 hours",
        ),
        IssueCategory::Clog => (
            &["plunger", "drain snake", "auger", "chemical cleaner"],
            &["drain cleaner", "replacement drain parts"],
            &[
                "Use appropriate PPE when using chemicals",
                "Avoid harsh chemicals on older pipes",
            ],
            "30 minutes - 2 hours",
        ),
        IssueCategory::WaterHeater => (
            &["multimeter", "thermostat", "element wrench", "pipe wrench"],
            &["thermostat", "heating element", "anode rod"],
            &["Turn off power/gas before service", "Check for gas leaks"],
            "2-4 hours",
        ),
        IssueCategory::Faucet => (
            &["faucet wrench", "screwdriver", "plumber's tape", "cartridge puller"],
            &["faucet cartridge", "o-rings", "aerator", "handle"],
            &["Turn off water supply", "Check for hot water scalding"],
            "1-2 hours",
        ),
        IssueCategory::Toilet => (
            &["toilet auger", "wax ring", "closet bolts", "tank repair kit"],
            &["flapper", "fill valve", "flush valve", "wax ring"],
            &["Turn off water supply", "Use proper lifting techniques"],
            "1-2 hours",
        ),
        IssueCategory::Drain => (
            &["drain snake", "plunger", "chemical cleaner", "auger"],
            &["drain trap", "drain pipe", "cleanout plug"],
            &["Use appropriate PPE", "Ventilate area when using chemicals"],
            "30 minutes - 2 hours",
        ),
        IssueCategory::Pipe => (
            &["pipe wrench", "pipe cutter", "soldering torch", "fittings"],
            &["pipe sections", "fittings", "soldering materials"],
            &["Turn off water supply", "Check for gas leaks if near gas lines"],
            "2-4 hours",
        ),
        IssueCategory::Sewer => (
            &["sewer snake", "camera", "rooter", "hydro jet"],
            &["sewer pipe", "cleanout cap", "root treatment"],
            &["Use appropriate PPE", "Ventilate area", "Check for gas buildup"],
            "2-6 hours",
        ),
        IssueCategory::GarbageDisposal => (
            &["hex wrench", "allen wrench", "replacement parts"],
            &["disposal unit", "mounting hardware"],
            &["Turn off power before service", "Never put hand in disposal"],
            "1-2 hours",
        ),
        IssueCategory::WaterPressure => (
            &["pressure gauge", "pressure regulator", "pipe wrench"],
            &["pressure regulator", "pressure gauge"],
            &["Check for burst pipes", "Monitor for leaks after adjustment"],
            "1-3 hours",
        ),
        IssueCategory::Other => (&[], &[], &[], "1-2 hours"),
    }
}

fn next_steps(
    category: IssueCategory,
    severity: IssueSeverity,
    urgency: IssueUrgency,
) -> Vec<String> {
    let mut steps = Vec::new();

    match urgency {
        IssueUrgency::Emergency => {
            steps.push("Dispatch emergency technician immediately");
            steps.push("Contact customer to confirm address and access");
        }
        IssueUrgency::High => {
            steps.push("Schedule technician within 2-4 hours");
            steps.push("Contact customer to confirm availability");
        }
        _ => {
            steps.push("Schedule technician within 24-48 hours");
            steps.push("Send confirmation email to customer");
        }
    }

    match category {
        IssueCategory::Leak => {
            steps.push("Instruct customer to turn off water supply if possible");
            steps.push("Prepare leak detection equipment");
        }
        IssueCategory::Clog => {
            steps.push("Bring appropriate drain cleaning tools");
            steps.push("Check if customer has tried DIY solutions");
        }
        IssueCategory::WaterHeater => {
            steps.push("Bring multimeter and testing equipment");
            steps.push("Check warranty status if applicable");
        }
        IssueCategory::Sewer => {
            steps.push("Bring sewer camera and rooter equipment");
            steps.push("Check for city sewer line responsibility");
        }
        _ => {}
    }

    if matches!(severity, IssueSeverity::High | IssueSeverity::Critical) {
        steps.push("Bring backup technician if needed");
        steps.push("Prepare for potential emergency parts ordering");
    }

    steps.into_iter().map(str::to_string).collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
