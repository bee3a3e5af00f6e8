//! Learning-resource suggestions for the skills the advice demands.

use std::collections::BTreeSet;

use crate::pipeline::types::{AdviceItem, ResourceSuggestion};

/// One suggestion set per distinct required skill. The BTreeSet gives a
/// stable, sorted skill order.
pub fn recommend(advice_items: &[AdviceItem]) -> Vec<ResourceSuggestion> {
    let skills: BTreeSet<&str> = advice_items
        .iter()
        .flat_map(|item| item.required_skills.iter().map(String::as_str))
        .collect();

    skills
        .into_iter()
        .map(|skill| ResourceSuggestion {
            skill: skill.to_string(),
            suggestions: vec![
                format!("Read a well-regarded book on {skill}"),
                format!("Take an online course covering {skill}"),
                format!("Find a mentor experienced in {skill}"),
                format!("Join a community or forum focused on {skill}"),
                format!("Practice {skill} and ask for feedback"),
            ],
        })
        .collect()
}
