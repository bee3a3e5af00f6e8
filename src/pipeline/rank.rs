//! RICE prioritization: reach * impact * confidence / effort.

use crate::pipeline::types::{AdviceItem, AdviceKind, Priority};

/// Fixed tier cutoffs; not configurable per call
pub const HIGH_PRIORITY_THRESHOLD: f64 = 20.0;
pub const MEDIUM_PRIORITY_THRESHOLD: f64 = 10.0;

/// Reach is a fixed lookup by advice kind
pub fn reach_for(kind: AdviceKind) -> f64 {
    match kind {
        AdviceKind::Strategy | AdviceKind::GoalOriented => 10.0,
        AdviceKind::Innovation => 9.0,
        AdviceKind::Action => 8.0,
        AdviceKind::Exploration => 7.0,
        AdviceKind::Development => 6.0,
        AdviceKind::Learning => 5.0,
    }
}

fn raw_score(item: &AdviceItem) -> f64 {
    let effort = item.estimated_effort.max(1) as f64;
    reach_for(item.kind) * item.potential_impact as f64 * item.confidence / effort
}

fn priority_for(score: f64) -> Priority {
    if score >= HIGH_PRIORITY_THRESHOLD {
        Priority::High
    } else if score >= MEDIUM_PRIORITY_THRESHOLD {
        Priority::Medium
    } else {
        Priority::Low
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Score, tier, sort, and rank the items. Existing score fields are ignored
/// and recomputed, so ranking is idempotent. Ties keep their original
/// relative order: the sort is stable on purpose.
pub fn rank(items: Vec<AdviceItem>) -> Vec<AdviceItem> {
    let mut scored: Vec<(f64, AdviceItem)> = items
        .into_iter()
        .map(|item| (raw_score(&item), item))
        .collect();

    // Comparison uses the unrounded score; only storage is rounded
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, (raw, mut item))| {
            item.rice_score = round2(raw);
            item.priority = priority_for(raw);
            item.rank = idx + 1;
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(
        id: &str,
        kind: AdviceKind,
        effort: u8,
        impact: u8,
        confidence: f64,
    ) -> AdviceItem {
        AdviceItem {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            kind,
            source_insight_id: "insight_1".to_string(),
            confidence,
            estimated_effort: effort,
            potential_impact: impact,
            required_skills: vec![],
            steps: vec![],
            rice_score: 0.0,
            priority: Priority::Low,
            rank: 0,
        }
    }

    #[test]
    fn rice_formula_and_thresholds() {
        // reach=10, impact=5, confidence=1.0, effort=1 -> 50 -> high
        let ranked = rank(vec![item("a", AdviceKind::Strategy, 1, 5, 1.0)]);
        assert_eq!(ranked[0].rice_score, 50.0);
        assert_eq!(ranked[0].priority, Priority::High);

        // reach=8, impact=2, confidence=0.5, effort=5 -> 1.6 -> low
        let ranked = rank(vec![item("b", AdviceKind::Action, 5, 2, 0.5)]);
        assert_eq!(ranked[0].rice_score, 1.6);
        assert_eq!(ranked[0].priority, Priority::Low);
    }

    #[test]
    fn medium_band() {
        // reach=8, impact=2, confidence=0.8, effort=1 -> 12.8
        let ranked = rank(vec![item("c", AdviceKind::Action, 1, 2, 0.8)]);
        assert_eq!(ranked[0].rice_score, 12.8);
        assert_eq!(ranked[0].priority, Priority::Medium);
    }

    #[test]
    fn zero_effort_is_floored_to_one() {
        let ranked = rank(vec![item("d", AdviceKind::Learning, 0, 4, 1.0)]);
        assert_eq!(ranked[0].rice_score, 20.0);
    }

    #[test]
    fn ranks_are_dense_and_descending() {
        let ranked = rank(vec![
            item("low", AdviceKind::Learning, 5, 2, 0.5),
            item("high", AdviceKind::Strategy, 1, 5, 1.0),
            item("mid", AdviceKind::Action, 2, 4, 0.8),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
        let ranks: Vec<usize> = ranked.iter().map(|i| i.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        for pair in ranked.windows(2) {
            assert!(pair[0].rice_score >= pair[1].rice_score);
        }
    }

    #[test]
    fn ties_keep_original_order() {
        let ranked = rank(vec![
            item("first", AdviceKind::Action, 2, 4, 0.5),
            item("second", AdviceKind::Action, 2, 4, 0.5),
            item("third", AdviceKind::Action, 2, 4, 0.5),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn reranking_is_idempotent() {
        let once = rank(vec![
            item("a", AdviceKind::Strategy, 3, 5, 0.9),
            item("b", AdviceKind::Action, 1, 2, 0.8),
            item("c", AdviceKind::Innovation, 4, 5, 0.7),
        ]);
        let twice = rank(once.clone());
        let order_once: Vec<&str> = once.iter().map(|i| i.id.as_str()).collect();
        let order_twice: Vec<&str> = twice.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order_once, order_twice);
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.rice_score, b.rice_score);
            assert_eq!(a.rank, b.rank);
        }
    }
}
