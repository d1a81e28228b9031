mod utils;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use utils::mock_log_provider::{MockLogProvider, RecordedLog};
use vwo_rust::output_logger::{
    initialize_output_logger, log_message, shutdown_output_logger, LogLevel,
};
use vwo_rust::{make_ranges, AccountContext, Settings, TrackingPayloadBuilder, VwoErr};

fn settings_without_campaigns() -> Settings {
    serde_json::from_value(json!({
        "accountId": 60_781,
        "sdkKey": "sample-sdk-key"
    }))
    .unwrap()
}

// The logger state is process-global, so all phases run inside one test to
// keep their ordering deterministic.
#[test]
fn test_diagnostics_reach_installed_provider() {
    let provider = Arc::new(MockLogProvider::new());
    initialize_output_logger(&Some(LogLevel::Debug), Some(provider.clone()));

    let builder = TrackingPayloadBuilder::default();
    let account = AccountContext::new(60_781, "sample-sdk-key");
    let dimensions = HashMap::from([("plan".to_string(), "pro".to_string())]);

    let _ = builder.build_track_user_payload(&account, "Ashley", "vwo_variationShown", 20, 3);
    let _ =
        builder.build_push_event_payload(&account, "Ashley", "vwo_syncVisitorProp", &dimensions);

    let result = make_ranges(settings_without_campaigns());
    assert!(matches!(result, Err(VwoErr::ConfigurationError(_))));

    let long_msg = "x".repeat(500);
    log_message("TruncationCheck", LogLevel::Debug, long_msg);

    shutdown_output_logger();

    {
        let logs = provider.logs.lock().unwrap();

        assert_eq!(logs[0], RecordedLog::Init);
        assert_eq!(logs[logs.len() - 1], RecordedLog::Shutdown);

        assert!(logs.iter().any(|log| matches!(
            log,
            RecordedLog::Debug(tag, msg)
                if tag == "EventArchPayload"
                    && msg.contains("track-user")
                    && msg.contains("60781")
                    && msg.contains("Ashley")
                    && msg.contains("20")
        )));

        assert!(logs.iter().any(|log| matches!(
            log,
            RecordedLog::Debug(tag, msg)
                if tag == "EventArchPayload"
                    && msg.contains("push")
                    && msg.contains(r#""plan":"pro""#)
        )));

        assert!(logs.iter().any(|log| matches!(
            log,
            RecordedLog::Error(tag, msg)
                if tag == "Settings" && msg.contains("campaign data")
        )));

        let truncated = logs
            .iter()
            .find_map(|log| match log {
                RecordedLog::Debug(tag, msg) if tag == "TruncationCheck" => Some(msg.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(truncated.chars().count(), 400);
        assert!(truncated.ends_with("...[TRUNCATED]"));
    }

    // level gate: at Error, builder debug entries stay out but the
    // configuration failure still comes through
    provider.clear();
    initialize_output_logger(&Some(LogLevel::Error), Some(provider.clone()));

    let _ = builder.build_track_user_payload(&account, "Ashley", "vwo_variationShown", 20, 3);
    let _ = make_ranges(settings_without_campaigns());

    shutdown_output_logger();

    let logs = provider.logs.lock().unwrap();
    assert!(!logs
        .iter()
        .any(|log| matches!(log, RecordedLog::Debug(_, _))));
    assert!(logs.iter().any(|log| matches!(
        log,
        RecordedLog::Error(tag, _) if tag == "Settings"
    )));
}
