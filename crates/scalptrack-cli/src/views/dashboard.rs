//! Dashboard view.

use scalptrack_core::dashboard::{DashboardSummary, average_wellness};

use crate::app::AppState;

pub async fn run(state: &AppState) -> bool {
    // Three independent requests with no mutual ordering; each has its own
    // fault boundary so one failure cannot blank the whole dashboard.
    let (count, last_entry, trend) = tokio::join!(
        state.logs.monthly_count(),
        state.logs.last_log_info(),
        state.logs.symptom_trend(),
    );

    let count = count.unwrap_or_else(|e| {
        tracing::debug!("[Dashboard] Monthly count unavailable: {}", e);
        Default::default()
    });
    let last_entry = last_entry.unwrap_or_else(|e| {
        tracing::debug!("[Dashboard] Last entry unavailable: {}", e);
        None
    });
    let trend = trend.unwrap_or_else(|e| {
        tracing::debug!("[Dashboard] Symptom trend unavailable: {}", e);
        Vec::new()
    });

    let summary = DashboardSummary {
        avg_wellness: average_wellness(&trend),
        last_entry,
        total_entries: count.log_count,
        month: count.month,
        trend,
    };
    render(&summary);
    true
}

fn render(summary: &DashboardSummary) {
    println!("Your scalptrack dashboard");
    println!();
    match &summary.last_entry {
        Some(info) => println!("Last entry:    {}", info.last_log_date),
        None => println!("Last entry:    No entries yet - start logging"),
    }
    if summary.month.is_empty() {
        println!("Total entries: {}", summary.total_entries);
    } else {
        println!(
            "Total entries: {} ({})",
            summary.total_entries, summary.month
        );
    }
    println!("Avg. wellness: {}", summary.avg_wellness);

    if !summary.trend.is_empty() {
        println!();
        println!("Symptom timeline (last 30 days):");
        for point in &summary.trend {
            println!("  {}  level {}", point.date, point.average_symptom_score);
        }
    }
}
