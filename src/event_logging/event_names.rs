/// Reserved event fired when a visitor is shown a variation. The only event
/// whose base properties carry sdk usage statistics.
pub const VWO_VARIATION_SHOWN_EVENT_NAME: &str = "vwo_variationShown";

/// Reserved event used to sync custom visitor properties for post
/// segmentation.
pub const VWO_SYNC_VISITOR_PROP_EVENT_NAME: &str = "vwo_syncVisitorProp";
