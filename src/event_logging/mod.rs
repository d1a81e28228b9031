pub use event_payload::*;
pub use payload_builder::*;
pub use revenue::*;
pub use tracking_context::*;

pub mod event_names;

mod event_payload;
mod payload_builder;
mod revenue;
mod tracking_context;
