/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Identity of a Grafana-managed rule. Unique within a rule group;
/// data-source-managed rules carry no uid.
#[derive(
    SerializeDisplay, DeserializeFromStr, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RuleUid(String);

#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct AlertName(String);

#[derive(
    SerializeDisplay, DeserializeFromStr, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct MetricName(String);

#[derive(
    SerializeDisplay, DeserializeFromStr, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct LabelName(String);

impl RuleUid {
    /// Mint a fresh uid for a newly created rule.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RuleUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RuleUid {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        (!s.is_empty()
            && s.len() <= 40
            && s.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .then(|| Self(s.to_string()))
        .ok_or_else(|| Error::InvalidRuleUid(s.to_string()))
    }
}

impl AlertName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AlertName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AlertName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl MetricName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MetricName {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        (chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == ':')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':'))
        .then(|| Self(s.to_string()))
        .ok_or_else(|| Error::InvalidMetricName(s.to_string()))
    }
}

impl LabelName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LabelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LabelName {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        (chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_'))
        .then(|| Self(s.to_string()))
        .ok_or_else(|| Error::InvalidLabelName(s.to_string()))
    }
}
