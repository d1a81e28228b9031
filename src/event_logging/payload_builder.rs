use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use crate::event_logging::revenue::RevenueValue;
use crate::event_logging::tracking_context::{AccountContext, CampaignRef, GoalRef, GoalType};
use crate::utils::{get_visitor_uuid, Clock, RandomSource, SystemClock, ThreadRandom};
use crate::vwo_metadata::{
    PLATFORM_SERVER, SDK_LANGUAGE, SDK_VERSION, SETTINGS_API_VERSION,
};

/// Assembles the query parameters and JSON bodies for outbound tracking
/// calls. Holds no state beyond the injected clock and random source, so a
/// single instance can be shared freely across threads.
///
/// Every public builder samples the clock once and threads that moment
/// through the merge helpers - all time-derived fields within one payload
/// agree on a single "now".
pub struct TrackingPayloadBuilder {
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl Default for TrackingPayloadBuilder {
    fn default() -> Self {
        TrackingPayloadBuilder::new(Arc::new(SystemClock), Arc::new(ThreadRandom))
    }
}

impl TrackingPayloadBuilder {
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        TrackingPayloadBuilder { clock, random }
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub(crate) fn random(&self) -> &dyn RandomSource {
        self.random.as_ref()
    }

    /// Query parameters for the legacy track-user (impression) endpoint.
    #[must_use]
    pub fn build_impression_params(
        &self,
        account: &AccountContext,
        campaign: &CampaignRef,
        user_id: &str,
        variation_id: u64,
    ) -> HashMap<String, String> {
        let now_secs = self.clock.now_unix_secs();

        let mut params = HashMap::from([("ed".to_string(), r#"{"p":"server"}"#.to_string())]);

        self.merge_common_tracking_fields(
            account,
            campaign,
            user_id,
            variation_id,
            &mut params,
            now_secs,
        );

        params
    }

    /// Query parameters for the legacy track-goal (conversion) endpoint.
    ///
    /// The revenue field only rides along for revenue goals, and only when
    /// the caller supplied a value that survived ingestion; anything else is
    /// silently omitted rather than failing the call.
    #[must_use]
    pub fn build_conversion_params(
        &self,
        account: &AccountContext,
        campaign: &CampaignRef,
        user_id: &str,
        variation_id: u64,
        goal: &GoalRef,
        revenue_value: Option<&RevenueValue>,
    ) -> HashMap<String, String> {
        let now_secs = self.clock.now_unix_secs();

        let mut params = HashMap::from([("goal_id".to_string(), goal.id.to_string())]);

        if goal.goal_type == GoalType::RevenueTracking {
            if let Some(revenue) = revenue_value {
                params.insert("r".to_string(), revenue.to_param_string());
            }
        }

        self.merge_common_tracking_fields(
            account,
            campaign,
            user_id,
            variation_id,
            &mut params,
            now_secs,
        );

        params
    }

    /// Query parameters for fetching the settings file. Settings calls never
    /// carry the `env` field, so it is stripped after the generic merge.
    #[must_use]
    pub fn build_settings_fetch_params(&self, account: &AccountContext) -> HashMap<String, String> {
        let mut params = HashMap::from([
            ("a".to_string(), account.account_id.to_string()),
            ("i".to_string(), account.sdk_key.clone()),
            ("r".to_string(), self.random.next_f64().to_string()),
            ("platform".to_string(), PLATFORM_SERVER.to_string()),
            ("api-version".to_string(), SETTINGS_API_VERSION.to_string()),
        ]);

        merge_common_fields(&mut params, "");
        params.remove("env");

        params
    }

    /// Query parameters for the legacy push (custom dimension) endpoint.
    #[must_use]
    pub fn build_push_params(
        &self,
        account: &AccountContext,
        user_id: &str,
        tag_key: &str,
        tag_value: &str,
    ) -> HashMap<String, String> {
        let now_secs = self.clock.now_unix_secs();

        // Structured serialization; tag keys and values never get spliced
        // into a JSON string by hand.
        let tags = json!({ "u": { tag_key: tag_value } });

        let mut params = HashMap::from([("tags".to_string(), tags.to_string())]);

        self.merge_tracking_call_fields(account, user_id, &mut params, now_secs);
        merge_common_fields(&mut params, &account.sdk_key);

        params
    }

    pub fn merge_common_tracking_fields(
        &self,
        account: &AccountContext,
        campaign: &CampaignRef,
        user_id: &str,
        variation_id: u64,
        params: &mut HashMap<String, String>,
        now_secs: u64,
    ) {
        params.insert("experiment_id".to_string(), campaign.id.to_string());
        // variation id
        params.insert("combination".to_string(), variation_id.to_string());
        params.insert("ap".to_string(), PLATFORM_SERVER.to_string());

        self.merge_tracking_call_fields(account, user_id, params, now_secs);
        merge_common_fields(params, &account.sdk_key);
    }

    pub fn merge_tracking_call_fields(
        &self,
        account: &AccountContext,
        user_id: &str,
        params: &mut HashMap<String, String>,
        now_secs: u64,
    ) {
        params.insert("account_id".to_string(), account.account_id.to_string());
        params.insert("sId".to_string(), now_secs.to_string());
        params.insert(
            "u".to_string(),
            get_visitor_uuid(user_id, account.account_id),
        );

        // coarse cache-buster derived from the same sampled moment
        params.insert("random".to_string(), (now_secs as f64 / 10.0).to_string());
    }
}

/// Fields every outbound call carries. `env` is only added when an sdk key
/// is present.
pub fn merge_common_fields(params: &mut HashMap<String, String>, sdk_key: &str) {
    params.insert("sdk-v".to_string(), SDK_VERSION.to_string());
    params.insert("sdk".to_string(), SDK_LANGUAGE.to_string());
    if !sdk_key.is_empty() {
        params.insert("env".to_string(), sdk_key.to_string());
    }
}
