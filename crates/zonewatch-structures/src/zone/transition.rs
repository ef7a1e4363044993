use serde::{Deserialize, Serialize};

/// State-machine output for a single evaluation of one zone
///
/// `evaluate` returns `None` for the (overwhelmingly common) ticks where
/// nothing changed, so only the two real transitions need variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneTransition {
    /// Agent crossed from outside to inside
    Entered,
    /// Agent crossed from inside to durably outside (past the buffer)
    Exited,
}

impl std::fmt::Display for ZoneTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneTransition::Entered => write!(f, "entered"),
            ZoneTransition::Exited => write!(f, "exited"),
        }
    }
}
