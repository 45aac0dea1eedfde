use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// separates the line (or mode) tag from the place name in a stop identifier,
/// as in `4 - Denfert-Rochereau`.
pub const STOP_NAME_SEPARATOR: &str = " - ";

/// line-qualified stop identifier. two lines serving the same physical place
/// are distinct stops, joined in the graph by walking edges.
#[derive(
    Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StopId(pub String);

impl StopId {
    pub fn new(id: impl Into<String>) -> StopId {
        StopId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// the line or mode tag, i.e. the text before the first separator.
    /// a stop without a separator is its own tag.
    pub fn line_tag(&self) -> &str {
        match self.0.split_once(STOP_NAME_SEPARATOR) {
            Some((tag, _)) => tag,
            None => &self.0,
        }
    }

    /// the place name, i.e. the text after the first separator.
    pub fn place_name(&self) -> &str {
        match self.0.split_once(STOP_NAME_SEPARATOR) {
            Some((_, name)) => name,
            None => &self.0,
        }
    }
}

impl Display for StopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StopId {
    fn from(value: &str) -> Self {
        StopId(value.to_string())
    }
}

impl From<String> for StopId {
    fn from(value: String) -> Self {
        StopId(value)
    }
}
