use serde::{Deserialize, Serialize};

/// Tenant + environment pair stitched into every outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountContext {
    pub account_id: u64,
    pub sdk_key: String,
}

impl AccountContext {
    #[must_use]
    pub fn new(account_id: u64, sdk_key: impl Into<String>) -> Self {
        AccountContext {
            account_id,
            sdk_key: sdk_key.into(),
        }
    }
}

/// The experiment an event pertains to. The variation (combination) id
/// travels alongside as a plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignRef {
    pub id: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    RevenueTracking,
    CustomGoal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GoalRef {
    pub id: u64,

    #[serde(rename = "type")]
    pub goal_type: GoalType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl GoalRef {
    #[must_use]
    pub fn new(id: u64, goal_type: GoalType) -> Self {
        GoalRef {
            id,
            goal_type,
            identifier: None,
        }
    }
}
