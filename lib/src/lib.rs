/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub(crate) mod error;
pub(crate) mod ids;
pub(crate) mod rules;

pub use error::{Error, Result};
pub use ids::{AlertName, LabelName, MetricName, RuleUid};
pub use rules::{
    AlertQuery, AlertingRule, ExecErrState, GrafanaRule, GrafanaRuleDef, NoDataState,
    RecordingRule, RelativeTimeRange, Rule, RuleGroup, RuleGroupAction, SwapOperation,
};
