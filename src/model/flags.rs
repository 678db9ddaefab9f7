use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flag {
    HighFatigue,
    BelowThreshold,
    HighPerformer,
}

pub fn flag_order() -> &'static [Flag] {
    &[Flag::HighFatigue, Flag::BelowThreshold, Flag::HighPerformer]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerAction {
    Rest,
    Train,
    Optimal,
}

impl WorkerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerAction::Rest => "rest",
            WorkerAction::Train => "train",
            WorkerAction::Optimal => "optimal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetAction {
    Fix,
    Ok,
}

impl AssetAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetAction::Fix => "fix",
            AssetAction::Ok => "ok",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    RiskAlert,
    Optimize,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::RiskAlert => {
                "Risk alert: high fatigue or degraded assets detected. Action required."
            }
            Advisory::Optimize => "Operations stable. Load can be increased by 10%.",
        }
    }
}
