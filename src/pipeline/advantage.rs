//! Advantage-vs-increment analyzer.
//!
//! The sibling scoring variant of the advice pipeline: instead of turning a
//! transcript into an action plan, it maps where each speaker already holds an
//! advantage and where the untapped growth (increment) lies. Its output is the
//! exact payload the insight extractor consumes as `advantages`/`increments`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pipeline::types::Utterance;

/// A high-frequency concept extracted from the transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyConcept {
    pub concept: String,
    pub frequency: usize,
    /// frequency / total word count, rounded to 4 decimal places
    pub importance: f64,
}

/// A concept one speaker dominates relative to the others
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvantageEntry {
    #[serde(default)]
    pub speaker: String,
    pub concept: String,
    /// Speaker's share of all mentions, 0..=1
    pub strength: f64,
    #[serde(default)]
    pub mention_count: usize,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A growth opportunity scored by growth potential, market demand, and
/// personal fit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncrementEntry {
    pub concept: String,
    #[serde(default)]
    pub growth_potential: f64,
    #[serde(default)]
    pub market_demand: f64,
    #[serde(default)]
    pub personal_fit: f64,
    pub composite_score: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub actionable_steps: Vec<String>,
}

/// Prior experience used to estimate personal fit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoricalData {
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixMatch {
    pub increment: String,
    pub match_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixRow {
    pub advantage: String,
    pub matches: Vec<MatrixMatch>,
}

/// Advantage x increment cross-reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvantageMatrix {
    pub advantage_concepts: Vec<String>,
    pub increment_concepts: Vec<String>,
    pub matrix: Vec<MatrixRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarChart {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub advantage: String,
    pub increment: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heatmap {
    pub advantages: Vec<String>,
    pub increments: Vec<String>,
    pub data: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvantageVisualization {
    pub radar_chart: RadarChart,
    pub bar_chart: crate::pipeline::types::BarChart,
    pub heatmap: Heatmap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvantageReport {
    pub key_concepts: Vec<KeyConcept>,
    pub advantages: Vec<AdvantageEntry>,
    pub increments: Vec<IncrementEntry>,
    pub advantage_matrix: AdvantageMatrix,
    pub visualization: AdvantageVisualization,
}

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("static regex"));

static HIGH_DEMAND: &[&str] = &[
    "ai",
    "intelligence",
    "data",
    "cloud",
    "blockchain",
    "sustainability",
    "renewable",
];
static MEDIUM_DEMAND: &[&str] = &[
    "management",
    "marketing",
    "design",
    "experience",
    "analytics",
    "product",
];

static TECHNICAL_CATEGORY: &[&str] = &[
    "technical",
    "technology",
    "algorithm",
    "system",
    "architecture",
    "code",
    "development",
];
static BUSINESS_CATEGORY: &[&str] = &[
    "market", "business", "product", "sales", "user", "operations",
];
static MANAGEMENT_CATEGORY: &[&str] = &[
    "management",
    "team",
    "project",
    "process",
    "strategy",
    "leadership",
];

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

fn categorize(concept: &str) -> &'static str {
    let lower = concept.to_lowercase();
    if TECHNICAL_CATEGORY.iter().any(|kw| lower.contains(kw)) {
        "technical"
    } else if BUSINESS_CATEGORY.iter().any(|kw| lower.contains(kw)) {
        "business"
    } else if MANAGEMENT_CATEGORY.iter().any(|kw| lower.contains(kw)) {
        "management"
    } else {
        "general"
    }
}

/// Analyzer over one transcript; stateless apart from its concept cap
#[derive(Debug, Clone)]
pub struct AdvantageAnalyzer {
    max_key_concepts: usize,
}

impl AdvantageAnalyzer {
    pub fn new(max_key_concepts: usize) -> Self {
        Self { max_key_concepts }
    }

    pub fn analyze(
        &self,
        transcript: &[Utterance],
        historical: Option<&HistoricalData>,
    ) -> Result<AdvantageReport> {
        let key_concepts = self.extract_key_concepts(transcript);
        let advantages = detect_advantages(transcript, &key_concepts);
        let increments = score_increments(&key_concepts, historical);
        let advantage_matrix = build_matrix(&advantages, &increments);
        let visualization = build_visualization(&advantages, &increments);

        tracing::debug!(
            concepts = key_concepts.len(),
            advantages = advantages.len(),
            increments = increments.len(),
            "advantage analysis complete"
        );

        Ok(AdvantageReport {
            key_concepts,
            advantages,
            increments,
            advantage_matrix,
            visualization,
        })
    }

    /// Top-N word frequencies as concepts. Stopword-free NLP this is not;
    /// words shorter than three characters are dropped.
    fn extract_key_concepts(&self, transcript: &[Utterance]) -> Vec<KeyConcept> {
        let all_text = transcript
            .iter()
            .map(|u| u.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let words: Vec<String> = WORD_RE
            .find_iter(&all_text)
            .map(|m| m.as_str().to_lowercase())
            .collect();
        let total = words.len();
        if total == 0 {
            return Vec::new();
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for w in words.iter().filter(|w| w.len() > 2) {
            *counts.entry(w.as_str()).or_insert(0) += 1;
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        // Alphabetical tie-break keeps the cut deterministic
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        ranked
            .into_iter()
            .take(self.max_key_concepts)
            .map(|(concept, frequency)| KeyConcept {
                concept: concept.to_string(),
                frequency,
                importance: round4(frequency as f64 / total as f64),
            })
            .collect()
    }
}

/// Per-speaker mention counting: a speaker "owns" a concept in proportion to
/// how many of their utterances mention it.
fn detect_advantages(transcript: &[Utterance], key_concepts: &[KeyConcept]) -> Vec<AdvantageEntry> {
    let mut speaker_concepts: Vec<(String, HashMap<&str, usize>)> = Vec::new();
    for utterance in transcript {
        let lower = utterance.text.to_lowercase();
        let idx = match speaker_concepts
            .iter()
            .position(|(s, _)| *s == utterance.speaker)
        {
            Some(idx) => idx,
            None => {
                speaker_concepts.push((utterance.speaker.clone(), HashMap::new()));
                speaker_concepts.len() - 1
            }
        };
        let entry = &mut speaker_concepts[idx].1;
        for concept in key_concepts {
            if lower.contains(concept.concept.as_str()) {
                *entry.entry(concept.concept.as_str()).or_insert(0) += 1;
            }
        }
    }

    let mut totals: HashMap<&str, usize> = HashMap::new();
    for (_, counts) in &speaker_concepts {
        for (concept, count) in counts {
            *totals.entry(concept).or_insert(0) += count;
        }
    }

    let mut advantages = Vec::new();
    for (speaker, counts) in &speaker_concepts {
        let mut top: Vec<(&str, usize)> = counts.iter().map(|(c, n)| (*c, *n)).collect();
        top.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        for (concept, count) in top.into_iter().take(5) {
            let total = totals.get(concept).copied().unwrap_or(0);
            let strength = if total == 0 {
                0.0
            } else {
                round4(count as f64 / total as f64)
            };
            advantages.push(AdvantageEntry {
                speaker: speaker.clone(),
                concept: concept.to_string(),
                strength,
                mention_count: count,
                category: Some(categorize(concept).to_string()),
                description: Some(format!(
                    "Stands out in {concept}; a competitive edge worth building on"
                )),
            });
        }
    }
    advantages
}

fn market_demand(concept: &str) -> f64 {
    let lower = concept.to_lowercase();
    if HIGH_DEMAND.iter().any(|kw| lower.contains(kw)) {
        0.9
    } else if MEDIUM_DEMAND.iter().any(|kw| lower.contains(kw)) {
        0.7
    } else {
        0.5
    }
}

fn personal_fit(concept: &str, historical: Option<&HistoricalData>) -> f64 {
    let Some(data) = historical else { return 0.5 };
    if data
        .experience
        .iter()
        .any(|e| e.description.to_lowercase().contains(concept))
    {
        return 0.8;
    }
    if data.skills.iter().any(|s| s.to_lowercase().contains(concept)) {
        return 0.7;
    }
    0.5
}

fn score_increments(
    key_concepts: &[KeyConcept],
    historical: Option<&HistoricalData>,
) -> Vec<IncrementEntry> {
    let mut increments: Vec<IncrementEntry> = key_concepts
        .iter()
        .map(|concept| {
            // Novelty discount: the more often a concept was already said,
            // the less headroom it has
            let growth_potential = (concept.importance * 0.7
                + (1.0 - concept.frequency as f64 / 100.0) * 0.3)
                .max(0.0);
            let demand = market_demand(&concept.concept);
            let fit = personal_fit(&concept.concept, historical);
            let composite = (growth_potential + demand + fit) / 3.0;
            IncrementEntry {
                concept: concept.concept.clone(),
                growth_potential: round4(growth_potential),
                market_demand: demand,
                personal_fit: fit,
                composite_score: round4(composite),
                category: Some(categorize(&concept.concept).to_string()),
                description: Some(format!(
                    "Sizeable room to grow in {}; worth focused investment",
                    concept.concept
                )),
                actionable_steps: vec![
                    format!("Study the fundamentals of {}", concept.concept),
                    format!("Track current trends and developments in {}", concept.concept),
                    format!("Look for hands-on opportunities in {}", concept.concept),
                    format!("Talk with practitioners working in {}", concept.concept),
                    format!("Set a learning plan and goals for {}", concept.concept),
                ],
            }
        })
        .collect();

    increments.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));
    increments
}

fn match_score(advantage: &str, increment: &str) -> f64 {
    if advantage.contains(increment) || increment.contains(advantage) {
        1.0
    } else {
        0.0
    }
}

fn build_matrix(advantages: &[AdvantageEntry], increments: &[IncrementEntry]) -> AdvantageMatrix {
    let mut advantage_concepts: Vec<String> = Vec::new();
    for adv in advantages {
        if !advantage_concepts.contains(&adv.concept) {
            advantage_concepts.push(adv.concept.clone());
        }
    }
    let increment_concepts: Vec<String> = increments
        .iter()
        .take(10)
        .map(|inc| inc.concept.clone())
        .collect();

    let matrix = advantage_concepts
        .iter()
        .map(|advantage| MatrixRow {
            advantage: advantage.clone(),
            matches: increment_concepts
                .iter()
                .map(|increment| MatrixMatch {
                    increment: increment.clone(),
                    match_score: match_score(advantage, increment),
                })
                .collect(),
        })
        .collect();

    AdvantageMatrix {
        advantage_concepts,
        increment_concepts,
        matrix,
    }
}

fn build_visualization(
    advantages: &[AdvantageEntry],
    increments: &[IncrementEntry],
) -> AdvantageVisualization {
    let categories = ["technical", "business", "management", "general"];
    let values = categories
        .iter()
        .map(|cat| {
            advantages
                .iter()
                .filter(|adv| adv.category.as_deref() == Some(cat))
                .count() as f64
                / 5.0
        })
        .collect();

    let top: Vec<&IncrementEntry> = increments.iter().take(10).collect();
    let bar_chart = crate::pipeline::types::BarChart {
        categories: top.iter().map(|inc| inc.concept.clone()).collect(),
        values: top.iter().map(|inc| inc.composite_score).collect(),
    };

    let mut heat_advantages: Vec<String> = Vec::new();
    for adv in advantages {
        if !heat_advantages.contains(&adv.concept) {
            heat_advantages.push(adv.concept.clone());
        }
        if heat_advantages.len() == 5 {
            break;
        }
    }
    let heat_increments: Vec<String> = increments
        .iter()
        .take(5)
        .map(|inc| inc.concept.clone())
        .collect();
    let mut data = Vec::new();
    for advantage in &heat_advantages {
        for increment in &heat_increments {
            data.push(HeatmapCell {
                advantage: advantage.clone(),
                increment: increment.clone(),
                value: match_score(advantage, increment),
            });
        }
    }

    AdvantageVisualization {
        radar_chart: RadarChart {
            categories: categories.iter().map(|c| c.to_string()).collect(),
            values,
        },
        bar_chart,
        heatmap: Heatmap {
            advantages: heat_advantages,
            increments: heat_increments,
            data,
        },
    }
}
