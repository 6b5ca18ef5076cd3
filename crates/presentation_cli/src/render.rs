//! Terminal rendering of the popup, the alert panel and helper listings

use std::fmt::Write as _;

use application::{BackendHealth, PanelStatus, PanelView, PopupView};
use domain::MAJOR_CITIES;

/// Render the point popup
pub fn render_popup(view: &PopupView) -> String {
    let mut out = format!("📍 {}\n", view.location());

    if view.loading {
        out.push_str("   Loading weather data...\n");
        return out;
    }

    if let Some(temperature) = &view.temperature {
        let _ = writeln!(out, "   🌡️  Temperature: {temperature}");
    }
    if let Some(condition) = &view.condition {
        let _ = writeln!(out, "   ☁️  Condition: {condition}");
    }

    if view.alerts.is_empty() {
        let _ = writeln!(out, "   ✅ {}", PopupView::NO_ALERTS);
    } else {
        out.push_str("   ⚠️  Active Alerts:\n");
        for alert in &view.alerts {
            let _ = writeln!(out, "     {} {}", alert.category.emoji(), alert.title);
            let _ = writeln!(out, "        {}", alert.description);
        }
    }

    out
}

/// Render the regional alert panel
pub fn render_panel(view: &PanelView) -> String {
    let marker = if view.expanded { "▼" } else { "▶" };
    let mut out = format!("🍁 Weather Alerts {marker}\n");

    if !view.expanded {
        let _ = writeln!(out, "   {}", view.summary);
        return out;
    }

    match view.status {
        PanelStatus::Loading => {
            let _ = writeln!(out, "   ⏳ {}", view.summary);
        },
        PanelStatus::NotFetched => {
            let _ = writeln!(out, "   {}", view.summary);
        },
        PanelStatus::AllClear => {
            let _ = writeln!(out, "   {}", view.summary);
            out.push_str("   ✅ All clear\n");
        },
        PanelStatus::Alerts(_) => {
            let _ = writeln!(out, "   {}", view.summary);
            let breakdown = view
                .breakdown
                .iter()
                .map(|(category, count)| {
                    format!("{} {}: {count}", category.emoji(), category.label())
                })
                .collect::<Vec<_>>()
                .join("  ");
            let _ = writeln!(out, "   {breakdown}");
            for row in &view.rows {
                let city = row
                    .city
                    .as_deref()
                    .map(|c| format!(" ({c})"))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "   {} {}{city} [{}]",
                    row.category.emoji(),
                    row.title,
                    row.severity
                );
                let _ = writeln!(out, "      {}", row.description);
            }
        },
    }

    if view.fetch_failed {
        if view.fetched_at.is_some() {
            out.push_str("   ⚠️  Last refresh failed, showing previous alerts\n");
        } else {
            out.push_str("   ⚠️  Could not reach the weather backend\n");
        }
    }
    if let Some(fetched_at) = view.fetched_at {
        let _ = writeln!(out, "   Updated {}", fetched_at.format("%H:%M:%S UTC"));
    }

    out
}

/// Render the predefined city table
pub fn render_cities() -> String {
    let mut out = String::from("🏙️  Major Canadian cities:\n");
    for city in &MAJOR_CITIES {
        let _ = writeln!(out, "   {:<12} {}", city.name, city.coordinate);
    }
    out
}

/// Render a backend health report
pub fn render_health(base_url: &str, health: &BackendHealth) -> String {
    if health.healthy {
        let latency = health
            .response_time_ms
            .map(|ms| format!(" ({ms}ms)"))
            .unwrap_or_default();
        format!("✅ Backend healthy: {base_url}{latency}")
    } else {
        let reason = health.error.as_deref().unwrap_or("unknown error");
        format!("❌ Backend unhealthy: {base_url}: {reason}")
    }
}
