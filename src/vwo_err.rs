use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum VwoErr {
    // Settings
    ConfigurationError(String),
}

impl Display for VwoErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VwoErr::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl VwoErr {
    pub fn name(&self) -> &'static str {
        match self {
            VwoErr::ConfigurationError(_) => "ConfigurationError",
        }
    }
}
