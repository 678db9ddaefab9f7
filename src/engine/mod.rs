pub mod advise;
pub mod rank;
pub mod scan;
pub mod score;

pub use rank::top_n;
pub use scan::find_at_risk;
pub use score::{
    classify_risk, composite_score, forecast, forecast_with, linear_forecast, score_all,
    score_entity,
};
