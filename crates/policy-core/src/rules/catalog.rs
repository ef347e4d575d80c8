//! Built-in recommendation rules
//!
//! These are the robust policies extracted from the enrollment saturation
//! study. They are fixed literals: nothing about a run changes them.

use super::{ActionParams, Condition, Event, Rule, RuleSet, Urgency};

pub const SATURATION_FACT: &str = "saturation";
pub const AREA_TYPE_FACT: &str = "area_type";

/// Mobile van deployment for low-saturation rural clusters.
pub fn robust_policy_rule() -> Rule {
    Rule::new(
        vec![
            Condition::less_than(SATURATION_FACT, 50),
            Condition::equal(AREA_TYPE_FACT, "Rural"),
        ],
        Event::recommend_action(ActionParams {
            title: "Deploy Mobile Enrollment Unit".into(),
            urgency: Urgency::High,
            action_steps: steps(&[
                "Dispatch Mobile Van to Sector 4",
                "Schedule local panchayat announcement",
                "Activate 4G hotspot backup",
            ]),
            confidence: 0.98,
            reasoning: "EMA Analysis indicates 98% success rate for Mobile Vans in low-saturation rural clusters.".into(),
        }),
    )
}

/// Weekend camp for under-saturated urban areas.
pub fn urban_policy_rule() -> Rule {
    Rule::new(
        vec![
            Condition::less_than(SATURATION_FACT, 60),
            Condition::equal(AREA_TYPE_FACT, "Urban"),
        ],
        Event::recommend_action(ActionParams {
            title: "Weekend Mega-Camp".into(),
            urgency: Urgency::Medium,
            action_steps: steps(&[
                "Setup camp in Community Hall",
                "Partner with local housing society",
                "Extend hours to 8 PM",
            ]),
            confidence: 0.92,
            reasoning: "Urban working population responds best to weekend accessibility.".into(),
        }),
    )
}

/// The exported rule set: rural rule first, urban rule second.
pub fn builtin_rule_set() -> RuleSet {
    RuleSet::new(vec![robust_policy_rule(), urban_policy_rule()])
}

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
