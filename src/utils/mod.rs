pub use time_util::*;
pub use uuid_util::*;

mod time_util;
mod uuid_util;
