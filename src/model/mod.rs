pub mod entity;
pub mod flags;
pub mod policy;
pub mod risk;
pub mod snapshot;

pub use entity::{Asset, Entity, ScoredEntity, Worker};
pub use policy::ScoringPolicy;
pub use risk::RiskClass;
pub use snapshot::Snapshot;
