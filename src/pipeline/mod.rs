//! Insight prioritization and action-planning pipeline.
//!
//! Extractor -> Synthesizer -> Ranker -> {Timeline, Resources} -> Assembler.
//! Every stage is a pure transformation over one request's data; nothing here
//! outlives a single `generate_advice` call and no state is shared across
//! invocations.

pub mod advantage;
pub mod assemble;
pub mod auxiliary;
pub mod classify;
pub mod extract;
pub mod rank;
pub mod resources;
pub mod synthesize;
pub mod timeline;
pub mod types;

use std::sync::Arc;

use tracing::debug;

use crate::config::PipelineConfig;
use crate::error::{AdviceMindError, Result};
use auxiliary::AuxiliaryAnalysis;
use classify::{Classifier, KeywordClassifier};
use extract::Extractor;
use types::{Report, Utterance};

/// One advice pipeline instance. Cheap to construct and safe to share; each
/// `generate_advice` call is fully independent.
pub struct AdvicePipeline {
    extractor: Extractor,
    config: PipelineConfig,
}

impl AdvicePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_classifier(config, Arc::new(KeywordClassifier))
    }

    /// Swap in a different sentence classifier without touching the rest of
    /// the pipeline contract
    pub fn with_classifier(config: PipelineConfig, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            extractor: Extractor::new(classifier),
            config,
        }
    }

    /// Run the full pipeline. Total for any well-typed input: an empty
    /// transcript produces an empty-insight report, never an error.
    pub fn generate_advice(
        &self,
        transcript: &[Utterance],
        auxiliary: &AuxiliaryAnalysis,
        user_goals: &[String],
    ) -> Result<Report> {
        let total_chars: usize = transcript.iter().map(|u| u.text.len()).sum();
        if total_chars > self.config.max_transcript_chars {
            return Err(AdviceMindError::Validation {
                message: format!(
                    "transcript too large: {total_chars} chars exceeds the {} limit",
                    self.config.max_transcript_chars
                ),
            });
        }

        let insights = self.extractor.extract(transcript, auxiliary);
        debug!(insights = insights.len(), "extracted insights");

        let items = synthesize::synthesize(&insights, user_goals);
        debug!(items = items.len(), "synthesized advice items");

        let ranked = rank::rank(items);
        let timeline = timeline::allocate(&ranked);
        let resources = resources::recommend(&ranked);

        Ok(assemble::assemble(
            insights,
            ranked,
            timeline,
            resources,
            self.config.top_chart_items,
        ))
    }
}
