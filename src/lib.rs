pub use event_logging::{
    AccountContext, CampaignRef, EventArchData, EventArchPayload, EventData, EventProps, GoalRef,
    GoalType, RevenueValue, TrackingPayloadBuilder, Visitor, VwoMeta,
};
pub use settings::{add_ranges_to_variations, make_ranges, Campaign, Settings, Variation};
pub use utils::{Clock, RandomSource, SystemClock, ThreadRandom};
pub use vwo_err::VwoErr;

pub mod event_logging;
pub mod output_logger;
pub mod settings;
pub mod utils;
pub mod vwo_metadata;

mod vwo_err;
