//! Report download view.

use scalptrack_core::report::{ReportPayload, report_file_name};

use crate::app::AppState;

pub async fn run(state: &AppState) -> bool {
    match state.reports.generate().await {
        Ok(ReportPayload::Document(bytes)) => {
            let file_name = report_file_name(chrono::Local::now().date_naive());
            match std::fs::write(&file_name, bytes) {
                Ok(()) => {
                    println!("Report generated and downloaded to {file_name}");
                    true
                }
                Err(e) => {
                    tracing::warn!("[Report] Could not write {}: {}", file_name, e);
                    eprintln!("Failed to save the report. Please try again.");
                    false
                }
            }
        }
        Ok(ReportPayload::Rejected { message }) => {
            // A disguised error body, not a document.
            eprintln!("{message}");
            false
        }
        Err(e) => {
            eprintln!(
                "{}",
                e.user_message("Failed to generate report. Please try again.")
            );
            false
        }
    }
}
