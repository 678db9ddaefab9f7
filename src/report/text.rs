use crate::report::{DashboardSummary, RankedName, format_score};

pub fn render_summary_text(data: &DashboardSummary) -> String {
    let mut out = String::new();

    out.push_str("Operations Dashboard Summary\n");
    out.push_str("============================\n\n");

    out.push_str("1. Load and savings\n");
    out.push_str(&format!(
        "Current load: {}\n",
        optional_percent(data.current_load)
    ));
    out.push_str(&format!(
        "Load forecast: {}\n",
        optional_percent(data.load_forecast)
    ));
    out.push_str(&format!(
        "Predicted load: {}\n",
        series_line(&data.load_prediction)
    ));
    out.push_str(&format!("Savings: {}\n\n", format_score(data.savings)));

    out.push_str("2. Advisor\n");
    out.push_str(&format!("Alerts: {}\n", data.alerts));
    out.push_str(&format!("{}\n\n", data.advisory_message));

    out.push_str("3. Workforce\n");
    if data.workers.is_empty() {
        out.push_str("No workers.\n");
    }
    for w in &data.workers {
        out.push_str(&format!(
            "{} ({}): score {}/100, forecast {}, {}, action {}",
            w.name,
            w.role,
            format_score(w.composite_score),
            format_score(w.forecast_score),
            w.risk.as_str(),
            w.action.as_str()
        ));
        if let Some(fatigue) = w.fatigue {
            out.push_str(&format!(", fatigue {}%", format_score(fatigue)));
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "Composite median: {} (p10 {}, p90 {})\n\n",
        format_score(data.composite_stats.median),
        format_score(data.composite_stats.p10),
        format_score(data.composite_stats.p90)
    ));

    out.push_str("4. Top performers\n");
    out.push_str(&format!("{}\n\n", ranked_line(&data.top_performers)));

    out.push_str(&format!(
        "5. At risk (score < {})\n",
        format_score(data.at_risk_threshold)
    ));
    out.push_str(&format!("{}\n\n", ranked_line(&data.at_risk)));

    out.push_str("6. Assets\n");
    if data.assets.is_empty() {
        out.push_str("No assets.\n");
    }
    for a in &data.assets {
        out.push_str(&format!(
            "{} ({}): condition {}%, action {}\n",
            a.name,
            a.kind,
            format_score(a.condition),
            a.action.as_str()
        ));
    }

    out
}

fn ranked_line(entries: &[RankedName]) -> String {
    if entries.is_empty() {
        return "none".to_string();
    }
    entries
        .iter()
        .map(|e| format!("{} ({})", e.name, format_score(e.score)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn optional_percent(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{}%", format_score(v)),
        None => "n/a".to_string(),
    }
}

fn series_line(values: &[f64]) -> String {
    if values.is_empty() {
        return "n/a".to_string();
    }
    values
        .iter()
        .map(|v| format_score(*v))
        .collect::<Vec<_>>()
        .join(", ")
}
