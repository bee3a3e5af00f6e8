//! Final report composition and chart-ready aggregates.

use crate::pipeline::types::{
    AdviceItem, BarChart, GanttChart, GanttPhase, GanttTask, Insight, PieChart, Priority, Report,
    ResourceSuggestion, Timeline, Visualization,
};

/// Pure struct composition; cannot fail given well-typed prior-stage output
pub fn assemble(
    insights: Vec<Insight>,
    ranked_items: Vec<AdviceItem>,
    timeline: Timeline,
    resources: Vec<ResourceSuggestion>,
    top_chart_items: usize,
) -> Report {
    let visualization = build_visualization(&ranked_items, &timeline, top_chart_items);
    Report {
        key_insights: insights,
        prioritized_advice: ranked_items,
        timeline,
        resources,
        visualization,
    }
}

fn build_visualization(
    ranked_items: &[AdviceItem],
    timeline: &Timeline,
    top_chart_items: usize,
) -> Visualization {
    let count = |priority: Priority| {
        ranked_items
            .iter()
            .filter(|item| item.priority == priority)
            .count()
    };
    let priority_distribution = PieChart {
        labels: vec![
            "high priority".to_string(),
            "medium priority".to_string(),
            "low priority".to_string(),
        ],
        values: vec![
            count(Priority::High),
            count(Priority::Medium),
            count(Priority::Low),
        ],
    };

    let top: Vec<&AdviceItem> = ranked_items.iter().take(top_chart_items).collect();
    let rice_scores = BarChart {
        categories: top.iter().map(|item| item.title.clone()).collect(),
        values: top.iter().map(|item| item.rice_score).collect(),
    };

    let mut tasks = Vec::new();
    for phase in &timeline.phases {
        for advice_id in &phase.advice_ids {
            // Derived view only; the ranked list stays the source of truth
            if let Some(item) = ranked_items.iter().find(|i| &i.id == advice_id) {
                tasks.push(GanttTask {
                    id: item.id.clone(),
                    name: item.title.clone(),
                    phase: phase.name.clone(),
                    priority: item.priority,
                    estimated_effort: item.estimated_effort,
                });
            }
        }
    }
    let timeline_gantt = GanttChart {
        tasks,
        phases: vec![
            GanttPhase {
                name: crate::pipeline::timeline::SHORT_TERM_NAME.to_string(),
                start: 0,
                end: 2,
            },
            GanttPhase {
                name: crate::pipeline::timeline::MEDIUM_TERM_NAME.to_string(),
                start: 3,
                end: 8,
            },
            GanttPhase {
                name: crate::pipeline::timeline::LONG_TERM_NAME.to_string(),
                start: 9,
                end: 24,
            },
        ],
    };

    Visualization {
        priority_distribution,
        rice_scores,
        timeline_gantt,
    }
}
