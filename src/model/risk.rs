use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskClass {
    AtRisk,
    Stable,
    HighPerformer,
}

impl RiskClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskClass::AtRisk => "at_risk",
            RiskClass::Stable => "stable",
            RiskClass::HighPerformer => "high_performer",
        }
    }
}
