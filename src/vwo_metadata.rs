use serde::{Deserialize, Serialize};

/// sdk version reported on every api hit
pub const SDK_VERSION: &str = "1.25.0";

/// sdk language tag reported on every api hit
pub const SDK_LANGUAGE: &str = "rust";

/// product tag for FullStack tracking calls
pub const PRODUCT_FS: &str = "FS";

/// Platform tag carried by server-side tracking calls.
pub const PLATFORM_SERVER: &str = "server";

/// Settings-fetch api version.
pub const SETTINGS_API_VERSION: &str = "1";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VwoMetadata {
    pub sdk_name: String,
    pub sdk_version: String,
}

impl Default for VwoMetadata {
    fn default() -> Self {
        VwoMetadata {
            sdk_name: SDK_LANGUAGE.to_string(),
            sdk_version: SDK_VERSION.to_string(),
        }
    }
}
