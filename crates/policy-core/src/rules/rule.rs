//! Rule types
//!
//! Field declaration order is the serialized key order, so the structs here
//! mirror the exported document layout exactly.

use crate::error::RuleViolation;
use serde::{Deserialize, Serialize};

/// Event type emitted by every recommendation rule
pub const RECOMMEND_ACTION: &str = "recommend_action";

/// A condition/action pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub conditions: Conditions,
    pub event: Event,
}

/// Conjunction of conditions; every entry must hold for the rule to fire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub all: Vec<Condition>,
}

/// A single fact comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Name of the fact being tested (e.g., "saturation")
    pub fact: String,
    pub operator: Operator,
    pub value: FactValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    LessThan,
    Equal,
}

/// Right-hand side of a condition: a bare JSON integer or string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    Integer(i64),
    Text(String),
}

impl From<i64> for FactValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for FactValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FactValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The action fired when a rule's conditions hold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    pub params: ActionParams,
}

/// Payload of a `recommend_action` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionParams {
    pub title: String,
    pub urgency: Urgency,
    /// Ordered steps; order is significant to consumers
    pub action_steps: Vec<String>,
    /// Confidence in [0, 1]
    pub confidence: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Condition {
    /// `fact < value`
    pub fn less_than(fact: impl Into<String>, value: i64) -> Self {
        Self {
            fact: fact.into(),
            operator: Operator::LessThan,
            value: FactValue::Integer(value),
        }
    }

    /// `fact == value`
    pub fn equal(fact: impl Into<String>, value: impl Into<FactValue>) -> Self {
        Self {
            fact: fact.into(),
            operator: Operator::Equal,
            value: value.into(),
        }
    }
}

impl Event {
    /// Create a `recommend_action` event
    pub fn recommend_action(params: ActionParams) -> Self {
        Self {
            kind: RECOMMEND_ACTION.to_string(),
            params,
        }
    }
}

impl Rule {
    /// Create a rule firing `event` when all `conditions` hold
    pub fn new(conditions: Vec<Condition>, event: Event) -> Self {
        Self {
            conditions: Conditions { all: conditions },
            event,
        }
    }

    /// Check structural invariants, returning the first violation found.
    pub fn validate(&self) -> Result<(), RuleViolation> {
        if self.conditions.all.is_empty() {
            return Err(RuleViolation::NoConditions);
        }
        if let Some(c) = self.conditions.all.iter().find(|c| c.fact.is_empty()) {
            return Err(RuleViolation::EmptyFact {
                value: c.value.clone(),
            });
        }
        if self.event.kind.is_empty() {
            return Err(RuleViolation::EmptyEventType);
        }

        let params = &self.event.params;
        if params.title.is_empty() {
            return Err(RuleViolation::EmptyTitle);
        }
        if params.action_steps.is_empty() {
            return Err(RuleViolation::NoActionSteps {
                title: params.title.clone(),
            });
        }
        if !params.confidence.is_finite() || !(0.0..=1.0).contains(&params.confidence) {
            return Err(RuleViolation::ConfidenceOutOfRange {
                title: params.title.clone(),
                confidence: params.confidence,
            });
        }
        Ok(())
    }
}
