//! Rule model and built-in rule catalog
//!
//! Rules are condition/action pairs in the shape read by the downstream
//! rules engine: a conjunction of fact comparisons plus an event carrying
//! the recommended action.

pub mod catalog;
mod rule;
mod rule_set;

pub use rule::{ActionParams, Condition, Conditions, Event, FactValue, Operator, Rule, Urgency};
pub use rule_set::RuleSet;
