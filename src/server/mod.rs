//! Server module containing the AdviceMindServer implementation

use std::sync::Arc;

use serde::Deserialize;

use crate::config::Config;
use crate::feedback::ProgressStore;
use crate::pipeline::AdvicePipeline;
use crate::pipeline::advantage::{AdvantageAnalyzer, HistoricalData};
use crate::pipeline::types::Utterance;

// Submodules
pub mod router;

#[derive(Debug, Deserialize)]
pub struct GenerateAdviceParams {
    pub transcript: Vec<Utterance>,
    #[serde(default)]
    pub analysis_results: Option<serde_json::Value>,
    #[serde(default)]
    pub user_goals: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct AdvantageIncrementParams {
    pub transcript: Vec<Utterance>,
    #[serde(default)]
    pub historical_data: Option<HistoricalData>,
}

#[derive(Debug, Deserialize)]
pub struct RecordProgressParams {
    pub user_id: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub transcriptions: u32,
    #[serde(default)]
    pub analyses: u32,
    #[serde(default)]
    pub duration_minutes: u32,
}

/// Main AdviceMind server implementation
#[derive(Clone)]
pub struct AdviceMindServer {
    pub pipeline: Arc<AdvicePipeline>,
    pub advantage: Arc<AdvantageAnalyzer>,
    pub progress: Arc<ProgressStore>,
    pub config: Arc<Config>, // Retain config to avoid future env reads
}

impl AdviceMindServer {
    pub fn new(config: &Config) -> Self {
        Self {
            pipeline: Arc::new(AdvicePipeline::new(config.pipeline.clone())),
            advantage: Arc::new(AdvantageAnalyzer::new(config.pipeline.max_key_concepts)),
            progress: Arc::new(ProgressStore::new(config.progress.clone())),
            config: Arc::new(config.clone()),
        }
    }
}
