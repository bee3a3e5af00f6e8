//! Insight extraction from the transcript and auxiliary analysis payloads.

use std::sync::Arc;

use crate::pipeline::auxiliary::AuxiliaryAnalysis;
use crate::pipeline::classify::{Classifier, SentenceSignal, split_sentences};
use crate::pipeline::types::{Insight, InsightKind, Utterance};

/// Pre-sorted increment lists are capped at this many opportunity insights
const MAX_INCREMENT_INSIGHTS: usize = 5;

const DIRECT_ADVICE_CONFIDENCE: f64 = 0.8;
const ROLE_INSIGHT_CONFIDENCE: f64 = 0.85;

/// Turns a transcript plus optional auxiliary payloads into typed insights.
/// Pure: same inputs, same outputs, no side effects.
pub struct Extractor {
    classifier: Arc<dyn Classifier>,
}

impl Extractor {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub fn extract(&self, transcript: &[Utterance], auxiliary: &AuxiliaryAnalysis) -> Vec<Insight> {
        let mut insights: Vec<Insight> = Vec::new();
        let mut push = |insights: &mut Vec<Insight>,
                        kind: InsightKind,
                        content: String,
                        source: &str,
                        confidence: f64| {
            let id = format!("insight_{}", insights.len() + 1);
            insights.push(Insight {
                id,
                kind,
                content,
                source: source.to_string(),
                confidence,
            });
        };

        // Transcript scan: one insight per sentence the classifier flags
        let all_text = transcript
            .iter()
            .map(|u| u.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        for sentence in split_sentences(&all_text) {
            match self.classifier.classify(&sentence) {
                SentenceSignal::DirectAdvice => push(
                    &mut insights,
                    InsightKind::DirectAdvice,
                    sentence,
                    "transcription",
                    DIRECT_ADVICE_CONFIDENCE,
                ),
                SentenceSignal::KeyPoint => push(
                    &mut insights,
                    InsightKind::KeyPoint,
                    sentence,
                    "transcription",
                    DIRECT_ADVICE_CONFIDENCE,
                ),
                SentenceSignal::None => {}
            }
        }

        // Auxiliary modules; an absent or empty module simply contributes
        // nothing
        for advantage in &auxiliary.advantages {
            push(
                &mut insights,
                InsightKind::Strength,
                format!(
                    "You have an advantage in {} that can be developed further",
                    advantage.concept
                ),
                "advantage_analysis",
                advantage.strength,
            );
        }

        for increment in auxiliary.increments.iter().take(MAX_INCREMENT_INSIGHTS) {
            push(
                &mut insights,
                InsightKind::Opportunity,
                format!(
                    "The {} area shows significant room for growth and deserves focused attention",
                    increment.concept
                ),
                "increment_analysis",
                increment.composite_score,
            );
        }

        if let Some(role_play) = &auxiliary.role_play {
            for niche in &role_play.ecological_niches {
                push(
                    &mut insights,
                    InsightKind::RoleInsight,
                    format!(
                        "{} plays the {} role in this ecosystem; study their {}",
                        niche.participant_name,
                        niche.niche_type,
                        niche.key_attributes.join(", ")
                    ),
                    "role_play_analysis",
                    ROLE_INSIGHT_CONFIDENCE,
                );
            }
        }

        if let Some(future) = &auxiliary.future_prediction {
            for prediction in &future.predictions {
                push(
                    &mut insights,
                    InsightKind::FutureTrend,
                    format!(
                        "Over the next {}, expect {}; consider: {}",
                        prediction.timeframe, prediction.trend, prediction.suggestion
                    ),
                    "future_prediction",
                    prediction.confidence,
                );
            }
        }

        if let Some(non_consensus) = &auxiliary.non_consensus {
            for opinion in &non_consensus.non_consensus_opinions {
                push(
                    &mut insights,
                    InsightKind::NonConsensus,
                    format!(
                        "Non-consensus view: {}; this could be a breakthrough point",
                        opinion.content
                    ),
                    "non_consensus_analysis",
                    opinion.confidence,
                );
            }
        }

        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::classify::KeywordClassifier;

    fn extractor() -> Extractor {
        Extractor::new(Arc::new(KeywordClassifier))
    }

    fn utterance(text: &str) -> Utterance {
        Utterance {
            speaker: "A".to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn direct_advice_count_matches_advisory_sentences() {
        let transcript = vec![
            utterance("We should invest more. The weather is nice."),
            utterance("I recommend patience! Nothing else here."),
        ];
        let insights = extractor().extract(&transcript, &AuxiliaryAnalysis::default());
        let direct: Vec<_> = insights
            .iter()
            .filter(|i| i.kind == InsightKind::DirectAdvice)
            .collect();
        assert_eq!(direct.len(), 2);
        assert!(direct.iter().all(|i| i.confidence == 0.8));
        assert!(direct.iter().all(|i| i.source == "transcription"));
    }

    #[test]
    fn ids_are_sequential() {
        let transcript = vec![utterance("You must focus. You should rest.")];
        let insights = extractor().extract(&transcript, &AuxiliaryAnalysis::default());
        assert_eq!(insights[0].id, "insight_1");
        assert_eq!(insights[1].id, "insight_2");
    }

    #[test]
    fn empty_transcript_and_auxiliary_degrade_to_nothing() {
        let insights = extractor().extract(&[], &AuxiliaryAnalysis::default());
        assert!(insights.is_empty());
    }

    #[test]
    fn auxiliary_modules_map_to_typed_insights() {
        let aux: AuxiliaryAnalysis = serde_json::from_value(serde_json::json!({
            "advantages": [
                {"concept": "storytelling", "strength": 0.75}
            ],
            "increments": [
                {"concept": "analytics", "composite_score": 0.64},
                {"concept": "design", "composite_score": 0.61},
                {"concept": "sales", "composite_score": 0.58},
                {"concept": "writing", "composite_score": 0.55},
                {"concept": "ops", "composite_score": 0.52},
                {"concept": "extra", "composite_score": 0.5}
            ],
            "role_play": {
                "ecological_niches": [
                    {"participant_name": "Dana", "niche_type": "connector",
                     "key_attributes": ["curiosity", "follow-through"]}
                ]
            },
            "future_prediction": {
                "predictions": [
                    {"timeframe": "2 years", "trend": "consolidation",
                     "suggestion": "partnering early", "confidence": 0.7}
                ]
            },
            "non_consensus": {
                "non_consensus_opinions": [
                    {"content": "remote-only wins", "confidence": 0.65}
                ]
            }
        }))
        .unwrap();

        let insights = extractor().extract(&[], &aux);
        let count = |kind: InsightKind| insights.iter().filter(|i| i.kind == kind).count();
        assert_eq!(count(InsightKind::Strength), 1);
        // Capped at 5 of the 6 supplied increments
        assert_eq!(count(InsightKind::Opportunity), 5);
        assert_eq!(count(InsightKind::RoleInsight), 1);
        assert_eq!(count(InsightKind::FutureTrend), 1);
        assert_eq!(count(InsightKind::NonConsensus), 1);

        let strength = insights
            .iter()
            .find(|i| i.kind == InsightKind::Strength)
            .unwrap();
        assert_eq!(strength.confidence, 0.75);
        let role = insights
            .iter()
            .find(|i| i.kind == InsightKind::RoleInsight)
            .unwrap();
        assert_eq!(role.confidence, 0.85);
        assert!(role.content.contains("curiosity, follow-through"));
    }
}
