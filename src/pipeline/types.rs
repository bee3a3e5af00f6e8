//! Data model for the advice pipeline.
//!
//! Every entity here lives for exactly one pipeline invocation; identifiers
//! are sequential within that invocation and carry no global meaning.

use serde::{Deserialize, Serialize};

/// One speaker-tagged turn of the input transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    pub speaker: String,
    pub text: String,
}

/// Category of a derived insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    DirectAdvice,
    Strength,
    Opportunity,
    RoleInsight,
    FutureTrend,
    NonConsensus,
    KeyPoint,
    /// Forward-compat catch-all; the synthesizer skips these
    #[serde(other)]
    Unknown,
}

/// A typed, confidence-scored observation derived from the transcript or an
/// auxiliary analysis module. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub content: String,
    pub source: String,
    pub confidence: f64,
}

/// Category of an advice item, used for the RICE reach lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    Action,
    Development,
    Exploration,
    Learning,
    Strategy,
    Innovation,
    GoalOriented,
}

/// Priority tier assigned by the ranker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Low
    }
}

/// A concrete, actionable recommendation. The synthesizer populates every
/// field except `rice_score`, `priority`, and `rank`; the ranker fills those.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: AdviceKind,
    pub source_insight_id: String,
    pub confidence: f64,
    /// 1..=5
    pub estimated_effort: u8,
    /// 1..=5
    pub potential_impact: u8,
    pub required_skills: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub rice_score: f64,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub rank: usize,
}

/// One time-boxed execution window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub name: String,
    pub duration: String,
    pub advice_ids: Vec<String>,
    pub total_effort: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub phases: Vec<TimelinePhase>,
}

/// Learning-resource suggestions for one required skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSuggestion {
    pub skill: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieChart {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarChart {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GanttPhase {
    pub name: String,
    /// Week offsets
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GanttTask {
    pub id: String,
    pub name: String,
    pub phase: String,
    pub priority: Priority,
    pub estimated_effort: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GanttChart {
    pub tasks: Vec<GanttTask>,
    pub phases: Vec<GanttPhase>,
}

/// Chart-ready aggregates. Derived, read-only views; never a source of truth
/// for later logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visualization {
    pub priority_distribution: PieChart,
    pub rice_scores: BarChart,
    pub timeline_gantt: GanttChart,
}

/// The complete pipeline output, produced atomically or not at all
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub key_insights: Vec<Insight>,
    pub prioritized_advice: Vec<AdviceItem>,
    pub timeline: Timeline,
    pub resources: Vec<ResourceSuggestion>,
    pub visualization: Visualization,
}
