use crate::timeline::category::Category;
use serde::Serialize;

/// Most recent outcome of a sampling cycle, independent of timeline history.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum LatestState {
    /// Nothing has been classified or has failed yet.
    #[default]
    Pending,
    Classified {
        label: Category,
        confidence: f64,
    },
    Failed {
        error: String,
    },
}

impl LatestState {
    #[allow(dead_code)]
    pub fn error(&self) -> Option<&str> {
        match self {
            LatestState::Failed { error } => Some(error),
            _ => None,
        }
    }
}
