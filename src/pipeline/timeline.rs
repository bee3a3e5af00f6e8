//! Greedy allocation of ranked advice into three execution phases.

use crate::pipeline::types::{AdviceItem, Priority, Timeline, TimelinePhase};

pub const SHORT_TERM_NAME: &str = "Short term (1-2 weeks)";
pub const MEDIUM_TERM_NAME: &str = "Medium term (3-8 weeks)";
pub const LONG_TERM_NAME: &str = "Long term (9-24 weeks)";

/// Bucket items in rank order. Single pass, no rebalancing, no capacity
/// limit; a phase takes as many items as the rule sends it.
pub fn allocate(ranked_items: &[AdviceItem]) -> Timeline {
    let mut short = Vec::new();
    let mut medium = Vec::new();
    let mut long = Vec::new();
    let mut short_effort = 0u32;
    let mut medium_effort = 0u32;
    let mut long_effort = 0u32;

    for item in ranked_items {
        if item.priority == Priority::High && item.estimated_effort <= 3 {
            short.push(item.id.clone());
            short_effort += item.estimated_effort as u32;
        } else if item.priority == Priority::High
            || (item.priority == Priority::Medium && item.estimated_effort <= 4)
        {
            medium.push(item.id.clone());
            medium_effort += item.estimated_effort as u32;
        } else {
            long.push(item.id.clone());
            long_effort += item.estimated_effort as u32;
        }
    }

    Timeline {
        phases: vec![
            TimelinePhase {
                name: SHORT_TERM_NAME.to_string(),
                duration: "1-2 weeks".to_string(),
                advice_ids: short,
                total_effort: short_effort,
            },
            TimelinePhase {
                name: MEDIUM_TERM_NAME.to_string(),
                duration: "3-8 weeks".to_string(),
                advice_ids: medium,
                total_effort: medium_effort,
            },
            TimelinePhase {
                name: LONG_TERM_NAME.to_string(),
                duration: "9-24 weeks".to_string(),
                advice_ids: long,
                total_effort: long_effort,
            },
        ],
    }
}
