/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};

use super::group::RuleGroup;
use super::rule::Rule;
use crate::ids::RuleUid;

/// An edit to a rule group, constructed by an event handler and applied
/// with [`RuleGroup::apply`]. Rules are targeted by uid (Grafana-managed)
/// or by structural equality (data-source-managed).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum RuleGroupAction {
    AddRule { rule: Box<Rule> },
    UpdateRule { uid: RuleUid, rule: Box<Rule> },
    PauseRule { uid: RuleUid, pause: bool },
    DeleteRule { rule: Box<Rule> },
    ReorderRules { swaps: Vec<SwapOperation> },
    SetInterval { interval: String },
    RenameGroup { name: String },
}

/// A single exchange of the rules at two positions.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SwapOperation(pub usize, pub usize);

impl RuleGroupAction {
    pub fn add_rule(rule: Rule) -> Self {
        Self::AddRule {
            rule: Box::new(rule),
        }
    }

    pub fn update_rule(uid: RuleUid, rule: Rule) -> Self {
        Self::UpdateRule {
            uid,
            rule: Box::new(rule),
        }
    }

    pub fn pause_rule(uid: RuleUid, pause: bool) -> Self {
        Self::PauseRule { uid, pause }
    }

    pub fn delete_rule(rule: Rule) -> Self {
        Self::DeleteRule {
            rule: Box::new(rule),
        }
    }

    pub fn reorder_rules(swaps: Vec<SwapOperation>) -> Self {
        Self::ReorderRules { swaps }
    }

    pub fn set_interval(interval: impl Into<String>) -> Self {
        Self::SetInterval {
            interval: interval.into(),
        }
    }

    pub fn rename_group(name: impl Into<String>) -> Self {
        Self::RenameGroup { name: name.into() }
    }
}

impl RuleGroup {
    /// Apply an edit, producing the next group value. The input group is
    /// left untouched; callers may keep references into it. An action whose
    /// target does not exist in the group returns the group unchanged.
    pub fn apply(&self, action: &RuleGroupAction) -> RuleGroup {
        let mut next = self.clone();
        match action {
            RuleGroupAction::AddRule { rule } => {
                next.rules.push((**rule).clone());
            }
            RuleGroupAction::UpdateRule { uid, rule } => {
                match next.rules.iter_mut().find(|r| r.uid() == Some(uid)) {
                    Some(slot) => *slot = (**rule).clone(),
                    None => log::debug!("no rule with uid {uid} in group {}", self.name),
                }
            }
            RuleGroupAction::PauseRule { uid, pause } => {
                let rule = next.rules.iter_mut().find_map(|rule| match rule {
                    Rule::Grafana(rule) if rule.grafana_alert.uid == *uid => Some(rule),
                    _ => None,
                });
                match rule {
                    Some(rule) => rule.grafana_alert.is_paused = *pause,
                    None => log::debug!("no rule with uid {uid} in group {}", self.name),
                }
            }
            RuleGroupAction::DeleteRule { rule } => {
                // Matches by structural equality: all structurally
                // identical rules are removed.
                let before = next.rules.len();
                next.rules.retain(|r| r != &**rule);
                if next.rules.len() == before {
                    log::debug!("rule {} not found in group {}", rule.name(), self.name);
                }
            }
            RuleGroupAction::ReorderRules { swaps } => {
                for SwapOperation(a, b) in swaps {
                    if *a < next.rules.len() && *b < next.rules.len() {
                        next.rules.swap(*a, *b);
                    } else {
                        log::warn!("ignoring out-of-range swap ({a}, {b}) in group {}", self.name);
                    }
                }
            }
            RuleGroupAction::SetInterval { interval } => {
                next.interval = Some(interval.clone());
            }
            RuleGroupAction::RenameGroup { name } => {
                next.name = name.clone();
            }
        }
        next
    }
}
