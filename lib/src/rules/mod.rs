/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

mod action;
mod group;
mod rule;

pub use action::{RuleGroupAction, SwapOperation};
pub use group::RuleGroup;
pub use rule::{
    AlertQuery, AlertingRule, ExecErrState, GrafanaRule, GrafanaRuleDef, NoDataState,
    RecordingRule, RelativeTimeRange, Rule,
};
