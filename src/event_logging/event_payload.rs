use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::event_logging::event_names::VWO_VARIATION_SHOWN_EVENT_NAME;
use crate::event_logging::payload_builder::TrackingPayloadBuilder;
use crate::event_logging::revenue::RevenueValue;
use crate::event_logging::tracking_context::AccountContext;
use crate::log_d;
use crate::utils::get_visitor_uuid;
use crate::vwo_metadata::{VwoMetadata, PRODUCT_FS};

const TAG: &str = stringify!(EventArchPayload);

const VISITOR_ENVIRONMENT_PROP: &str = "vwo_fs_environment";

/// Envelope for the event-architecture tracking protocol. Everything the
/// remote service reads lives under the single `d` block.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventArchPayload {
    pub d: EventArchData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventArchData {
    pub msg_id: String,
    pub vis_id: String,
    pub session_id: u64,
    pub event: EventData,
    pub visitor: Visitor,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventData {
    pub props: EventProps,
    pub name: String,
    pub time: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventProps {
    #[serde(flatten)]
    pub metadata: VwoMetadata,

    #[serde(rename = "$visitor")]
    pub visitor: Visitor,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<u64>,

    // constant-valued legacy field required by a downstream consumer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_first: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_custom_event: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vwo_meta: Option<VwoMeta>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Visitor {
    pub props: HashMap<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VwoMeta {
    pub metric: HashMap<String, Vec<String>>,

    #[serde(flatten)]
    pub revenue_props: HashMap<String, Value>,
}

fn environment_visitor(sdk_key: &str) -> Visitor {
    Visitor {
        props: HashMap::from([(
            VISITOR_ENVIRONMENT_PROP.to_string(),
            Value::String(sdk_key.to_string()),
        )]),
    }
}

impl TrackingPayloadBuilder {
    /// Query properties every event-architecture call carries. Usage stats
    /// only ride along on the variation-shown event.
    #[must_use]
    pub fn build_event_base_properties(
        &self,
        account: &AccountContext,
        event_name: &str,
        usage_stats: &HashMap<String, String>,
    ) -> HashMap<String, String> {
        let mut properties = HashMap::from([
            ("en".to_string(), event_name.to_string()),
            ("a".to_string(), account.account_id.to_string()),
            ("env".to_string(), account.sdk_key.clone()),
            (
                "eTime".to_string(),
                self.clock().now_unix_millis().to_string(),
            ),
            ("random".to_string(), self.random().next_f64().to_string()),
            ("p".to_string(), PRODUCT_FS.to_string()),
        ]);

        if event_name == VWO_VARIATION_SHOWN_EVENT_NAME {
            properties.extend(
                usage_stats
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone())),
            );
        }

        properties
    }

    /// Base payload every event-architecture builder extends: message id,
    /// visitor id, session id, and the event/visitor blocks tagged with the
    /// environment.
    #[must_use]
    pub fn build_event_base_payload(
        &self,
        account: &AccountContext,
        user_id: &str,
        event_name: &str,
    ) -> EventArchPayload {
        let now_millis = self.clock().now_unix_millis();
        let now_secs = now_millis / 1000;
        let uuid = get_visitor_uuid(user_id, account.account_id);

        let props = EventProps {
            metadata: VwoMetadata::default(),
            visitor: environment_visitor(&account.sdk_key),
            id: None,
            variation: None,
            is_first: None,
            is_custom_event: None,
            vwo_meta: None,
        };

        EventArchPayload {
            d: EventArchData {
                msg_id: format!("{uuid}-{now_secs}"),
                vis_id: uuid,
                session_id: now_secs,
                event: EventData {
                    props,
                    name: event_name.to_string(),
                    time: now_millis,
                },
                visitor: environment_visitor(&account.sdk_key),
            },
        }
    }

    /// Payload recording that a visitor was shown a variation.
    #[must_use]
    pub fn build_track_user_payload(
        &self,
        account: &AccountContext,
        user_id: &str,
        event_name: &str,
        campaign_id: u64,
        variation_id: u64,
    ) -> EventArchPayload {
        let mut payload = self.build_event_base_payload(account, user_id, event_name);

        payload.d.event.props.id = Some(campaign_id);
        payload.d.event.props.variation = Some(variation_id);
        payload.d.event.props.is_first = Some(1);

        log_d!(
            TAG,
            "impression built for track-user of account:{} user:{} campaign:{}",
            account.account_id,
            user_id,
            campaign_id
        );

        payload
    }

    /// Payload recording a goal conversion. `metric_map` maps campaign id to
    /// the goal id tracked for that campaign.
    #[must_use]
    pub fn build_track_goal_payload(
        &self,
        account: &AccountContext,
        user_id: &str,
        event_name: &str,
        revenue_value: Option<&RevenueValue>,
        metric_map: &HashMap<u64, u64>,
        revenue_props: &[String],
    ) -> EventArchPayload {
        let mut payload = self.build_event_base_payload(account, user_id, event_name);

        let mut metric = HashMap::new();
        for (campaign_id, goal_id) in metric_map {
            metric.insert(format!("id_{campaign_id}"), vec![format!("g_{goal_id}")]);

            log_d!(
                TAG,
                "impression built for track-goal of goal:{} account:{} user:{} campaign:{}",
                event_name,
                account.account_id,
                user_id,
                campaign_id
            );
        }

        let mut vwo_meta = VwoMeta {
            metric,
            revenue_props: HashMap::new(),
        };

        if let Some(revenue) = revenue_value {
            for revenue_prop in revenue_props {
                vwo_meta
                    .revenue_props
                    .insert(revenue_prop.clone(), revenue.to_json());
            }
        }

        payload.d.event.props.vwo_meta = Some(vwo_meta);
        payload.d.event.props.is_custom_event = Some(true);

        payload
    }

    /// Payload syncing custom visitor dimensions for post segmentation. Each
    /// dimension is written to both the event-scoped and the visitor-scoped
    /// props so either view of the visitor carries it.
    #[must_use]
    pub fn build_push_event_payload(
        &self,
        account: &AccountContext,
        user_id: &str,
        event_name: &str,
        custom_dimension_map: &HashMap<String, String>,
    ) -> EventArchPayload {
        let mut payload = self.build_event_base_payload(account, user_id, event_name);

        payload.d.event.props.is_custom_event = Some(true);
        for (key, value) in custom_dimension_map {
            let value = Value::String(value.clone());
            payload
                .d
                .event
                .props
                .visitor
                .props
                .insert(key.clone(), value.clone());
            payload.d.visitor.props.insert(key.clone(), value);
        }

        log_d!(
            TAG,
            "impression built for push of account:{} user:{} properties:{}",
            account.account_id,
            user_id,
            serde_json::to_string(custom_dimension_map).unwrap_or_default()
        );

        payload
    }
}
