//! End-to-end tests for the advice pipeline, exercised without any transport.

use advice_mind::config::PipelineConfig;
use advice_mind::pipeline::AdvicePipeline;
use advice_mind::pipeline::auxiliary::AuxiliaryAnalysis;
use advice_mind::pipeline::types::{InsightKind, Priority, Utterance};
use serde_json::json;

fn pipeline() -> AdvicePipeline {
    AdvicePipeline::new(PipelineConfig::default())
}

fn utterance(speaker: &str, text: &str) -> Utterance {
    Utterance {
        speaker: speaker.to_string(),
        text: text.to_string(),
    }
}

#[test]
fn single_advisory_sentence_flows_through_every_stage() {
    let transcript = vec![utterance("Alice", "We should invest more in research.")];
    let report = pipeline()
        .generate_advice(&transcript, &AuxiliaryAnalysis::default(), &[])
        .unwrap();

    assert_eq!(report.key_insights.len(), 1);
    assert_eq!(report.key_insights[0].kind, InsightKind::DirectAdvice);
    assert_eq!(report.key_insights[0].confidence, 0.8);
    assert_eq!(report.key_insights[0].source, "transcription");

    assert_eq!(report.prioritized_advice.len(), 1);
    let item = &report.prioritized_advice[0];
    // reach 8 (action) * impact 2 * confidence 0.8 / effort 1
    assert_eq!(item.rice_score, 12.8);
    assert_eq!(item.priority, Priority::Medium);
    assert_eq!(item.rank, 1);
    assert_eq!(item.estimated_effort, 1);

    // Medium priority with effort <= 4 lands in the medium phase
    assert_eq!(report.timeline.phases.len(), 3);
    assert!(report.timeline.phases[0].advice_ids.is_empty());
    assert_eq!(report.timeline.phases[1].advice_ids, vec![item.id.clone()]);
    assert!(report.timeline.phases[2].advice_ids.is_empty());

    // "research" implies the analysis skill, which gets resource suggestions
    assert!(report.resources.iter().any(|r| r.skill == "analysis"));
    for resource in &report.resources {
        assert_eq!(resource.suggestions.len(), 5);
    }

    let pie = &report.visualization.priority_distribution;
    assert_eq!(pie.values.iter().sum::<usize>(), 1);
    assert_eq!(report.visualization.rice_scores.values, vec![12.8]);
    assert_eq!(report.visualization.timeline_gantt.tasks.len(), 1);
}

#[test]
fn empty_input_produces_an_empty_report_not_an_error() {
    let report = pipeline()
        .generate_advice(&[], &AuxiliaryAnalysis::default(), &[])
        .unwrap();
    assert!(report.key_insights.is_empty());
    assert!(report.prioritized_advice.is_empty());
    assert_eq!(report.timeline.phases.len(), 3);
    assert!(report.timeline.phases.iter().all(|p| p.advice_ids.is_empty()));
    assert!(report.resources.is_empty());
    assert!(report.visualization.rice_scores.values.is_empty());
    assert!(report.visualization.timeline_gantt.tasks.is_empty());
}

#[test]
fn non_advisory_chatter_yields_no_insights() {
    let transcript = vec![
        utterance("Alice", "The weather was lovely today."),
        utterance("Bob", "I agree, very sunny."),
    ];
    let report = pipeline()
        .generate_advice(&transcript, &AuxiliaryAnalysis::default(), &[])
        .unwrap();
    assert!(report.key_insights.is_empty());
    assert!(report.prioritized_advice.is_empty());
}

#[test]
fn full_run_with_auxiliary_and_goals() {
    let transcript = vec![
        utterance("Alice", "We should document the onboarding flow."),
        utterance(
            "Bob",
            "I recommend a comprehensive overhaul of our long-term strategic planning process so the core roadmap stays fundamentally sound.",
        ),
    ];
    let auxiliary: AuxiliaryAnalysis = serde_json::from_value(json!({
        "advantages": [
            {"concept": "storytelling", "strength": 0.75}
        ],
        "increments": [
            {"concept": "analytics", "composite_score": 0.64}
        ],
        "future_prediction": {
            "predictions": [
                {"timeframe": "2 years", "trend": "consolidation",
                 "suggestion": "partnering early", "confidence": 0.7}
            ]
        }
    }))
    .unwrap();
    let goals = vec!["ship v2".to_string()];

    let report = pipeline()
        .generate_advice(&transcript, &auxiliary, &goals)
        .unwrap();

    // 2 advisory sentences + advantage + increment + prediction
    assert_eq!(report.key_insights.len(), 5);
    // Every insight synthesizes here, plus one goal item
    assert_eq!(report.prioritized_advice.len(), 6);

    // Ranks are dense and scores non-increasing
    for (idx, item) in report.prioritized_advice.iter().enumerate() {
        assert_eq!(item.rank, idx + 1);
        if idx > 0 {
            assert!(item.rice_score <= report.prioritized_advice[idx - 1].rice_score);
        }
    }

    // Timeline is a partition of the ranked items
    let mut phase_ids: Vec<&String> = report
        .timeline
        .phases
        .iter()
        .flat_map(|p| p.advice_ids.iter())
        .collect();
    assert_eq!(phase_ids.len(), report.prioritized_advice.len());
    phase_ids.sort();
    phase_ids.dedup();
    assert_eq!(phase_ids.len(), report.prioritized_advice.len());

    // Resources cover the union of required skills, deduplicated and sorted
    let mut seen = std::collections::HashSet::new();
    for resource in &report.resources {
        assert!(seen.insert(resource.skill.clone()));
    }
    let skills: Vec<&str> = report.resources.iter().map(|r| r.skill.as_str()).collect();
    let mut sorted = skills.clone();
    sorted.sort();
    assert_eq!(skills, sorted);

    // Gantt mirrors the timeline
    assert_eq!(
        report.visualization.timeline_gantt.tasks.len(),
        report.prioritized_advice.len()
    );
    assert_eq!(report.visualization.timeline_gantt.phases.len(), 3);
}

#[test]
fn oversized_transcript_is_rejected() {
    let config = PipelineConfig {
        max_transcript_chars: 100,
        ..Default::default()
    };
    let pipeline = AdvicePipeline::new(config);
    let transcript = vec![utterance("Alice", &"x".repeat(200))];
    let result = pipeline.generate_advice(&transcript, &AuxiliaryAnalysis::default(), &[]);
    assert!(result.is_err());
}

#[test]
fn goals_and_transcript_advice_rank_together() {
    let transcript = vec![utterance("Alice", "We should tidy the desk.")];
    let report = pipeline()
        .generate_advice(
            &transcript,
            &AuxiliaryAnalysis::default(),
            &["become a better public speaker".to_string()],
        )
        .unwrap();

    // tidy-desk action: 8 * 2 * 0.8 / 1 = 12.8
    // goal item: 10 * 5 * 0.9 / 4 = 11.25
    assert_eq!(report.prioritized_advice.len(), 2);
    assert_eq!(report.prioritized_advice[0].rice_score, 12.8);
    assert_eq!(report.prioritized_advice[1].rice_score, 11.25);
    assert_eq!(report.prioritized_advice[1].source_insight_id, "goal_1");
}
