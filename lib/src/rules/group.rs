/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};

use super::rule::Rule;
use crate::ids::RuleUid;

/// An ordered group of rules evaluated at a common interval. Rule order is
/// semantically significant and is preserved across edits.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RuleGroup {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    pub rules: Vec<Rule>,
}

impl RuleGroup {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn find_rule(&self, uid: &RuleUid) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.uid() == Some(uid))
    }

    pub fn contains(&self, rule: &Rule) -> bool {
        self.rules.contains(rule)
    }
}
