use serde::{Deserialize, Serialize};

/// Main configuration structure, loaded from environment variables.
///
/// RICE priority thresholds are deliberately absent: they are fixed constants
/// in the ranker, not per-deployment knobs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub progress: ProgressConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Bounds and chart sizing for the advice pipeline
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Upper bound on concatenated transcript text; latency is bounded by
    /// bounding input size, not by concurrency control.
    pub max_transcript_chars: usize,
    /// How many top-ranked items the RICE bar chart carries
    pub top_chart_items: usize,
    /// How many key concepts the advantage analyzer extracts
    pub max_key_concepts: usize,
}

/// Progress store tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProgressConfig {
    /// History entries retained per user
    pub history_limit: usize,
    /// Next-achievement previews returned by stats
    pub next_achievements: usize,
}

/// Runtime-only settings (never serialized)
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub log_level: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_transcript_chars: 500_000,
            top_chart_items: 10,
            max_key_concepts: 20,
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            history_limit: 30,
            next_achievements: 3,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            progress: ProgressConfig::default(),
            runtime: RuntimeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from ADV_* environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn load() -> crate::error::Result<Self> {
        let mut config = Self::default();

        if let Some(max_chars) = std::env::var("ADV_MAX_TRANSCRIPT_CHARS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            config.pipeline.max_transcript_chars = max_chars.max(1_000);
        }

        if let Some(top) = std::env::var("ADV_TOP_CHART_ITEMS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            config.pipeline.top_chart_items = top.clamp(1, 50);
        }

        if let Some(concepts) = std::env::var("ADV_MAX_KEY_CONCEPTS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            config.pipeline.max_key_concepts = concepts.clamp(1, 100);
        }

        if let Some(limit) = std::env::var("ADV_PROGRESS_HISTORY_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            config.progress.history_limit = limit.clamp(1, 1_000);
        }

        if let Some(next) = std::env::var("ADV_PROGRESS_NEXT_ACHIEVEMENTS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            config.progress.next_achievements = next.clamp(1, 10);
        }

        if let Ok(level) = std::env::var("ADV_LOG") {
            if !level.trim().is_empty() {
                config.runtime.log_level = Some(level);
            }
        }

        Ok(config)
    }
}
