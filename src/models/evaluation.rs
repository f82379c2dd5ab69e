use serde::Serialize;

/// Result of one schedule evaluation: the open/closed verdict plus the
/// human-readable hint rendered under the badge when closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub is_open: bool,
    pub status_label: String,
}

impl Evaluation {
    pub fn closed(label: &str) -> Self {
        Self {
            is_open: false,
            status_label: label.to_string(),
        }
    }
}
