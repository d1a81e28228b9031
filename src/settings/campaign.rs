use serde::{Deserialize, Serialize};

use crate::event_logging::GoalRef;
use crate::log_e;
use crate::vwo_err::VwoErr;

const TAG: &str = stringify!(Settings);

/// Total number of buckets the traffic space is split into.
pub const MAX_TRAFFIC_VALUE: u64 = 10_000;

/// Sentinel allocation for variations that can never be bucketed.
const UNALLOCATED: i64 = -1;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub account_id: u64,

    #[serde(default)]
    pub sdk_key: String,

    #[serde(default)]
    pub version: Option<u64>,

    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: u64,
    pub key: String,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub percent_traffic: Option<f64>,

    #[serde(default)]
    pub goals: Vec<GoalRef>,

    #[serde(default)]
    pub variations: Vec<Variation>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    pub id: u64,
    pub name: String,

    /// Traffic split percentage for this variation.
    pub weight: f64,

    #[serde(default = "unallocated")]
    pub start_variation_allocation: i64,

    #[serde(default = "unallocated")]
    pub end_variation_allocation: i64,
}

fn unallocated() -> i64 {
    UNALLOCATED
}

/// Assigns bucket ranges to every campaign's variations.
///
/// A settings file without a non-empty campaigns list is a fatal
/// configuration error: processing stops and nothing partial is returned.
pub fn make_ranges(mut settings: Settings) -> Result<Settings, VwoErr> {
    if settings.campaigns.is_empty() {
        log_e!(
            TAG,
            "unable to fetch campaign data from settings while assigning variation ranges"
        );
        return Err(VwoErr::ConfigurationError(
            "campaigns list is missing or empty in settings".to_string(),
        ));
    }

    for campaign in &mut settings.campaigns {
        add_ranges_to_variations(&mut campaign.variations);
    }

    Ok(settings)
}

/// Splits the traffic space across variations in order of appearance. A
/// variation with weight `w` percent spans `ceil(w * 100)` buckets, capped
/// at the full space; zero-weight variations get the unallocated sentinel.
pub fn add_ranges_to_variations(variations: &mut [Variation]) {
    let mut offset: u64 = 0;

    for variation in variations {
        let step_factor = variation_bucket_range(variation.weight);
        if step_factor > 0 {
            variation.start_variation_allocation = (offset + 1) as i64;
            variation.end_variation_allocation = (offset + step_factor) as i64;
            offset += step_factor;
        } else {
            variation.start_variation_allocation = UNALLOCATED;
            variation.end_variation_allocation = UNALLOCATED;
        }
    }
}

fn variation_bucket_range(weight: f64) -> u64 {
    if weight <= 0.0 {
        return 0;
    }

    let start_range = (weight * 100.0).ceil() as u64;
    start_range.min(MAX_TRAFFIC_VALUE)
}
