/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid rule uid: {0}")]
    InvalidRuleUid(String),
    #[error("invalid metric name: {0}")]
    InvalidMetricName(String),
    #[error("invalid label name: {0}")]
    InvalidLabelName(String),
}
