use serde::Deserialize;
use crate::core::DEFAULT_START_LEVEL;
use crate::error::SessionError;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// 1-based position in the level sequence to begin at.
    pub start_level: usize,
    /// Maximum undo entries kept per level. `None` keeps everything.
    pub history_limit: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            start_level: DEFAULT_START_LEVEL,
            history_limit: None,
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }
}
