//! Advice synthesis: one candidate advice item per insight, plus one per
//! user goal.

use once_cell::sync::Lazy;

use crate::pipeline::types::{AdviceItem, AdviceKind, Insight, InsightKind, Priority};

/// skill name -> content keywords that imply it
static SKILL_KEYWORDS: Lazy<Vec<(&'static str, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        ("learning", vec!["learn", "study", "read", "course"]),
        ("analysis", vec!["analyz", "assess", "research", "evaluat"]),
        ("practice", vec!["practice", "apply", "implement", "execut"]),
        (
            "innovation",
            vec!["innovat", "creativ", "breakthrough", "novel"],
        ),
        (
            "communication",
            vec!["communicat", "present", "discuss", "speak"],
        ),
        ("management", vec!["manag", "plan", "organiz", "coordinat"]),
        (
            "technical",
            vec!["technical", "develop", "engineer", "program"],
        ),
    ]
});

/// Effort on a 1-5 scale from content length and scope keywords.
/// Thresholds: <50 chars -> 1, <100 -> 2, deep/systemic/comprehensive/
/// long-term -> 5, detailed/complete/complex -> 4, otherwise 3.
pub fn estimate_effort(content: &str) -> u8 {
    let lower = content.to_lowercase();
    if content.chars().count() < 50 {
        1
    } else if content.chars().count() < 100 {
        2
    } else if ["deep", "systemic", "comprehensive", "long-term"]
        .iter()
        .any(|kw| lower.contains(kw))
    {
        5
    } else if ["detailed", "complete", "complex"]
        .iter()
        .any(|kw| lower.contains(kw))
    {
        4
    } else {
        3
    }
}

/// Impact on a 1-5 scale from keyword presence
pub fn estimate_impact(content: &str) -> u8 {
    let lower = content.to_lowercase();
    if ["strategic", "strategy", "long-term", "core", "fundamental"]
        .iter()
        .any(|kw| lower.contains(kw))
    {
        5
    } else if ["important", "key", "significant"]
        .iter()
        .any(|kw| lower.contains(kw))
    {
        4
    } else if ["beneficial", "helpful", "improve"]
        .iter()
        .any(|kw| lower.contains(kw))
    {
        3
    } else {
        2
    }
}

/// All skills whose keyword set matches the content; matches are not
/// mutually exclusive
pub fn identify_required_skills(content: &str) -> Vec<String> {
    let lower = content.to_lowercase();
    SKILL_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(skill, _)| skill.to_string())
        .collect()
}

/// Substring between two markers, or None if either is missing
fn between<'a>(s: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = s.find(start)? + start.len();
    let len = s[from..].find(end)?;
    Some(&s[from..from + len])
}

fn generic_steps() -> Vec<String> {
    vec![
        "Clarify the core of the recommendation".to_string(),
        "Gather the information and resources it needs".to_string(),
        "Lay out a detailed action plan".to_string(),
        "Start executing and keep notes".to_string(),
        "Review outcomes and adjust regularly".to_string(),
    ]
}

fn synthesize_one(insight: &Insight, id: String) -> Option<AdviceItem> {
    let content = insight.content.as_str();
    let unscored = |title: String,
                        kind: AdviceKind,
                        effort: u8,
                        impact: u8,
                        skills: Vec<String>,
                        steps: Vec<String>| AdviceItem {
        id,
        title,
        description: content.to_string(),
        kind,
        source_insight_id: insight.id.clone(),
        confidence: insight.confidence,
        estimated_effort: effort,
        potential_impact: impact,
        required_skills: skills,
        steps,
        rice_score: 0.0,
        priority: Priority::Low,
        rank: 0,
    };

    match insight.kind {
        InsightKind::DirectAdvice => {
            let title = content
                .split(':')
                .next_back()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or(content)
                .to_string();
            Some(unscored(
                title,
                AdviceKind::Action,
                estimate_effort(content),
                estimate_impact(content),
                identify_required_skills(content),
                generic_steps(),
            ))
        }
        InsightKind::Strength => {
            let subject = between(content, "advantage in ", " that")
                .unwrap_or(content)
                .to_string();
            Some(unscored(
                format!("Build on your {subject} advantage"),
                AdviceKind::Development,
                3,
                4,
                vec![subject.clone()],
                vec![
                    format!("Assess your current {subject} capability"),
                    "Set specific improvement targets".to_string(),
                    "Find practice opportunities that exercise it".to_string(),
                    "Review and adjust regularly".to_string(),
                ],
            ))
        }
        InsightKind::Opportunity => {
            let subject = between(content, "The ", " area")
                .unwrap_or(content)
                .to_string();
            Some(unscored(
                format!("Explore opportunities in {subject}"),
                AdviceKind::Exploration,
                4,
                5,
                vec![
                    subject.clone(),
                    "market analysis".to_string(),
                    "trend assessment".to_string(),
                ],
                vec![
                    format!("Research the current state and trends of {subject}"),
                    "Identify the key players and openings".to_string(),
                    "Draft an entry or partnership strategy".to_string(),
                    "Start with a small pilot".to_string(),
                ],
            ))
        }
        InsightKind::RoleInsight => {
            let role = between(content, "plays the ", " role")
                .unwrap_or("observed")
                .to_string();
            let attrs = content
                .rsplit("study their ")
                .next()
                .unwrap_or("key attributes")
                .trim_end_matches('.')
                .to_string();
            Some(unscored(
                format!("Learn the {role} role's {attrs}"),
                AdviceKind::Learning,
                3,
                4,
                vec![
                    "observational learning".to_string(),
                    "self reflection".to_string(),
                ],
                vec![
                    format!("Observe how the {role} role operates"),
                    format!("Learn and practice {attrs}"),
                    "Apply them in a real setting".to_string(),
                    "Ask for feedback and iterate".to_string(),
                ],
            ))
        }
        InsightKind::FutureTrend => {
            let trend = between(content, "expect ", "; consider:")
                .unwrap_or(content)
                .to_string();
            Some(unscored(
                format!("Prepare for the trend: {trend}"),
                AdviceKind::Strategy,
                5,
                5,
                vec![
                    "strategic planning".to_string(),
                    "risk assessment".to_string(),
                ],
                vec![
                    format!("Analyze how \"{trend}\" will affect you"),
                    "Draft a response strategy and contingencies".to_string(),
                    "Roll it out in stages".to_string(),
                    "Monitor and adjust continuously".to_string(),
                ],
            ))
        }
        InsightKind::NonConsensus => {
            let opinion = between(content, "view: ", "; this")
                .unwrap_or(content)
                .to_string();
            let short: String = opinion.chars().take(40).collect();
            Some(unscored(
                format!("Explore a non-consensus view: {short}"),
                AdviceKind::Innovation,
                4,
                5,
                vec!["critical thinking".to_string(), "innovation".to_string()],
                vec![
                    format!("Dig into the evidence behind \"{opinion}\""),
                    "Contrast it with the mainstream position".to_string(),
                    "Test whether it holds up".to_string(),
                    "Decide how to apply or adapt it".to_string(),
                ],
            ))
        }
        // No synthesis rule; skipped so unknown extractor output stays
        // forward-compatible
        InsightKind::KeyPoint | InsightKind::Unknown => None,
    }
}

fn goal_item(goal: &str, goal_index: usize, id: String) -> AdviceItem {
    AdviceItem {
        id,
        title: format!("Work toward: {goal}"),
        description: format!("Tailored recommendation for your goal \"{goal}\""),
        kind: AdviceKind::GoalOriented,
        source_insight_id: format!("goal_{}", goal_index + 1),
        confidence: 0.9,
        estimated_effort: 4,
        potential_impact: 5,
        required_skills: vec!["goal management".to_string(), "execution".to_string()],
        steps: vec![
            format!("Break \"{goal}\" into concrete sub-goals"),
            "Attach a measurable indicator to each".to_string(),
            "Lay out a detailed action plan".to_string(),
            "Check progress regularly and adjust".to_string(),
        ],
        rice_score: 0.0,
        priority: Priority::Low,
        rank: 0,
    }
}

/// Map insights and goals to unscored advice items. Ids are sequential in
/// generation order; the ranker establishes the meaningful order later.
pub fn synthesize(insights: &[Insight], goals: &[String]) -> Vec<AdviceItem> {
    let mut items = Vec::new();
    for insight in insights {
        let id = format!("advice_{}", items.len() + 1);
        if let Some(item) = synthesize_one(insight, id) {
            items.push(item);
        }
    }
    for (goal_index, goal) in goals.iter().enumerate() {
        let id = format!("advice_{}", items.len() + 1);
        items.push(goal_item(goal, goal_index, id));
    }
    items
}
