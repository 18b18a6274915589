/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

// Wire-compatible subset of the ruler API's rule objects
// (POST /api/ruler/{datasource}/api/v1/rules/{namespace}).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{AlertName, LabelName, MetricName, RuleUid};

/// A single rule in a rule group. Variants are distinguished on the wire by
/// their marker field (`grafana_alert`, `alert` or `record`); only
/// Grafana-managed rules carry a uid and a pause flag.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum Rule {
    Grafana(GrafanaRule),
    Alerting(AlertingRule),
    Recording(RecordingRule),
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct GrafanaRule {
    pub grafana_alert: GrafanaRuleDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#for: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<LabelName, String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct GrafanaRuleDef {
    pub uid: RuleUid,
    pub title: String,
    pub condition: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<AlertQuery>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_paused: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_data_state: Option<NoDataState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec_err_state: Option<ExecErrState>,
}

/// One entry of a Grafana-managed rule's query pipeline. The query `model`
/// is datasource-specific and opaque at this level.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct AlertQuery {
    pub ref_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
    pub relative_time_range: RelativeTimeRange,
    pub datasource_uid: String,
    pub model: serde_json::Value,
}

/// Query window relative to the evaluation instant, in seconds.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RelativeTimeRange {
    pub from: i64,
    pub to: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum NoDataState {
    Alerting,
    NoData,
    #[serde(rename = "OK")]
    Ok,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum ExecErrState {
    Alerting,
    Error,
    #[serde(rename = "OK")]
    Ok,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct AlertingRule {
    pub alert: AlertName,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    pub expr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#for: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<LabelName, String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RecordingRule {
    pub record: MetricName,
    pub expr: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<LabelName, String>,
}

impl Rule {
    /// Uid of a Grafana-managed rule; data-source-managed rules are
    /// identified structurally by their name field instead.
    pub fn uid(&self) -> Option<&RuleUid> {
        match self {
            Rule::Grafana(rule) => Some(&rule.grafana_alert.uid),
            Rule::Alerting(_) | Rule::Recording(_) => None,
        }
    }

    /// Display name of the rule.
    pub fn name(&self) -> &str {
        match self {
            Rule::Grafana(rule) => &rule.grafana_alert.title,
            Rule::Alerting(rule) => rule.alert.as_str(),
            Rule::Recording(rule) => rule.record.as_str(),
        }
    }

    pub fn is_paused(&self) -> bool {
        match self {
            Rule::Grafana(rule) => rule.grafana_alert.is_paused,
            Rule::Alerting(_) | Rule::Recording(_) => false,
        }
    }
}
