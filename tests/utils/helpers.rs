use std::sync::Arc;

use vwo_rust::{Clock, RandomSource, TrackingPayloadBuilder};

pub const FIXED_NOW_MILLIS: u64 = 1_700_000_000_000;
pub const FIXED_RANDOM: f64 = 0.25;

pub struct FixedClock {
    pub millis: u64,
}

impl Clock for FixedClock {
    fn now_unix_secs(&self) -> u64 {
        self.millis / 1000
    }

    fn now_unix_millis(&self) -> u64 {
        self.millis
    }
}

pub struct FixedRandom {
    pub value: f64,
}

impl RandomSource for FixedRandom {
    fn next_f64(&self) -> f64 {
        self.value
    }
}

pub fn pinned_builder() -> TrackingPayloadBuilder {
    TrackingPayloadBuilder::new(
        Arc::new(FixedClock {
            millis: FIXED_NOW_MILLIS,
        }),
        Arc::new(FixedRandom {
            value: FIXED_RANDOM,
        }),
    )
}
