use log::{debug, error, info, warn, Level};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const MAX_CHARS: usize = 400;
const TRUNCATED_SUFFIX: &str = "...[TRUNCATED]";

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Warn;

lazy_static::lazy_static! {
    static ref LOGGER_STATE: RwLock<LoggerState> = RwLock::new(LoggerState {
        level: DEFAULT_LOG_LEVEL,
        provider: None,
    });
}

struct LoggerState {
    level: LogLevel,
    provider: Option<Arc<dyn OutputLogProvider>>,
}

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Debug)]
pub enum LogLevel {
    None,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_third_party_level(&self) -> Option<Level> {
        match self {
            LogLevel::Debug => Some(Level::Debug),
            LogLevel::Info => Some(Level::Info),
            LogLevel::Warn => Some(Level::Warn),
            LogLevel::Error => Some(Level::Error),
            LogLevel::None => None,
        }
    }

    fn severity(&self) -> u32 {
        match self {
            LogLevel::Debug => 4,
            LogLevel::Info => 3,
            LogLevel::Warn => 2,
            LogLevel::Error => 1,
            LogLevel::None => 0,
        }
    }
}

/// Sink for the sdk's diagnostic output. Install one through
/// [`initialize_output_logger`] to capture entries instead of routing them
/// to the `log` facade.
pub trait OutputLogProvider: Send + Sync {
    fn initialize(&self);
    fn debug(&self, tag: &str, msg: String);
    fn info(&self, tag: &str, msg: String);
    fn warn(&self, tag: &str, msg: String);
    fn error(&self, tag: &str, msg: String);
    fn shutdown(&self);
}

pub fn initialize_output_logger(
    level: &Option<LogLevel>,
    provider: Option<Arc<dyn OutputLogProvider>>,
) {
    let was_initialized = INITIALIZED.swap(true, Ordering::SeqCst);
    if was_initialized {
        return;
    }

    let mut state = match LOGGER_STATE.try_write_for(Duration::from_secs(5)) {
        Some(state) => state,
        None => {
            eprintln!("[VWO] Failed to lock LOGGER_STATE for initialize");
            return;
        }
    };
    let level = level.as_ref().unwrap_or(&DEFAULT_LOG_LEVEL).clone();
    state.level = level.clone();

    match provider {
        Some(provider_impl) => {
            provider_impl.initialize();
            state.provider = Some(provider_impl);
        }
        None => {
            let final_level = match level.to_third_party_level() {
                Some(level) => level,
                None => return,
            };

            if simple_logger::init_with_level(final_level).is_err() {
                log::set_max_level(final_level.to_level_filter());
            }
        }
    }
}

pub fn shutdown_output_logger() {
    let mut state = match LOGGER_STATE.try_write_for(Duration::from_secs(5)) {
        Some(state) => state,
        None => {
            eprintln!("[VWO] Failed to lock LOGGER_STATE for shutdown");
            return;
        }
    };

    if let Some(provider) = &mut state.provider {
        provider.shutdown();
    }

    INITIALIZED.store(false, Ordering::SeqCst);
}

pub fn log_message(tag: &str, level: LogLevel, msg: String) {
    let msg = truncate(msg);

    if let Some(state) = LOGGER_STATE.try_read_for(Duration::from_secs(5)) {
        if let Some(provider) = &state.provider {
            match level {
                LogLevel::Debug => provider.debug(tag, msg),
                LogLevel::Info => provider.info(tag, msg),
                LogLevel::Warn => provider.warn(tag, msg),
                LogLevel::Error => provider.error(tag, msg),
                LogLevel::None => {}
            }
            return;
        }
    } else {
        eprintln!("[VWO] Failed to lock LOGGER_STATE for logging");
    }

    if let Some(level) = level.to_third_party_level() {
        let mut target = String::from("Vwo::");
        target += tag;

        match level {
            Level::Debug => debug!(target: target.as_str(), "{}", msg),
            Level::Info => info!(target: target.as_str(), "{}", msg),
            Level::Warn => warn!(target: target.as_str(), "{}", msg),
            Level::Error => error!(target: target.as_str(), "{}", msg),
            _ => {}
        };
    }
}

pub fn has_valid_log_level(level: &LogLevel) -> bool {
    let state = match LOGGER_STATE.try_read_for(Duration::from_secs(5)) {
        Some(state) => state,
        None => {
            eprintln!("[VWO] Failed to lock LOGGER_STATE for level check");
            return false;
        }
    };

    level.severity() <= state.level.severity()
}

fn truncate(msg: String) -> String {
    if msg.chars().count() <= MAX_CHARS {
        return msg;
    }

    let visible_chars = MAX_CHARS.saturating_sub(TRUNCATED_SUFFIX.len());
    format!(
        "{}{}",
        msg.chars().take(visible_chars).collect::<String>(),
        TRUNCATED_SUFFIX
    )
}

#[macro_export]
macro_rules! log_d {
  ($tag:expr, $($arg:tt)*) => {
        {
            let level = $crate::output_logger::LogLevel::Debug;
            if $crate::output_logger::has_valid_log_level(&level) {
                $crate::output_logger::log_message($tag, level, format!($($arg)*));
            }
        }
    }
}

#[macro_export]
macro_rules! log_e {
  ($tag:expr, $($arg:tt)*) => {
        {
            let level = $crate::output_logger::LogLevel::Error;
            if $crate::output_logger::has_valid_log_level(&level) {
                $crate::output_logger::log_message($tag, level, format!($($arg)*));
            }
        }
    }
}
