use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationFactor {
    pub factor: String,
    pub impact: Impact,
    pub description: String,
}

impl ExplanationFactor {
    pub fn new(factor: &str, impact: Impact, description: &str) -> Self {
        Self {
            factor: factor.to_string(),
            impact,
            description: description.to_string(),
        }
    }
}
