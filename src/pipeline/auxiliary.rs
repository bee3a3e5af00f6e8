//! Typed auxiliary-analysis payload.
//!
//! Upstream analysis modules are optional: an absent or empty module yields
//! fewer insights, never an error. Unknown top-level keys are ignored during
//! deserialization, so new upstream modules do not break this consumer.

use serde::{Deserialize, Serialize};

pub use super::advantage::{AdvantageEntry, IncrementEntry};

/// Optional results from upstream analysis modules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuxiliaryAnalysis {
    #[serde(default)]
    pub advantages: Vec<AdvantageEntry>,
    #[serde(default)]
    pub increments: Vec<IncrementEntry>,
    #[serde(default)]
    pub role_play: Option<RolePlayAnalysis>,
    #[serde(default)]
    pub future_prediction: Option<FuturePredictionAnalysis>,
    #[serde(default)]
    pub non_consensus: Option<NonConsensusAnalysis>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RolePlayAnalysis {
    #[serde(default)]
    pub ecological_niches: Vec<EcologicalNiche>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcologicalNiche {
    pub participant_name: String,
    pub niche_type: String,
    #[serde(default)]
    pub key_attributes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FuturePredictionAnalysis {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub timeframe: String,
    pub trend: String,
    pub suggestion: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NonConsensusAnalysis {
    #[serde(default)]
    pub non_consensus_opinions: Vec<NonConsensusOpinion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NonConsensusOpinion {
    pub content: String,
    pub confidence: f64,
}
