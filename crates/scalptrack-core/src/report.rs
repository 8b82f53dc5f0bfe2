//! Report payload classification.
//!
//! The report endpoint answers with an octet stream. On failure some server
//! versions still answer 200 with a JSON error body under the document
//! content type, so the payload has to be sniffed before it is treated as a
//! downloadable file.

use chrono::NaiveDate;

/// How many leading bytes are inspected for an embedded JSON error.
const SNIFF_WINDOW: usize = 1024;

/// Message shown when the server rejects the report without saying why.
pub const REPORT_REJECTED_FALLBACK: &str = "Please add a log before generating the report.";

/// Classification of the bytes returned by the report endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportPayload {
    /// A real document, ready to write to disk.
    Document(Vec<u8>),
    /// A JSON error body disguised as a document.
    Rejected { message: String },
}

/// Sniffs `bytes` and decides whether they are a document or a disguised
/// error.
///
/// Only the first kilobyte is inspected: if it parses as JSON with an
/// explicit `success: false` marker, the payload is a rejection and its
/// `message` (or a fixed fallback) is surfaced as a validation error.
/// Anything else, including JSON without the marker, is a document.
pub fn classify_report_payload(bytes: Vec<u8>) -> ReportPayload {
    let window = &bytes[..bytes.len().min(SNIFF_WINDOW)];
    if let Ok(prefix) = std::str::from_utf8(window)
        && let Ok(value) = serde_json::from_str::<serde_json::Value>(prefix)
        && value.get("success").and_then(|s| s.as_bool()) == Some(false)
    {
        let message = value
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or(REPORT_REJECTED_FALLBACK)
            .to_string();
        return ReportPayload::Rejected { message };
    }
    ReportPayload::Document(bytes)
}

/// File name for a downloaded report, stamped with the given date.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("scalp-care-report-{}.docx", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_failure_body_is_rejected() {
        let body = br#"{"success": false, "message": "No logs in the last 30 days"}"#.to_vec();
        assert_eq!(
            classify_report_payload(body),
            ReportPayload::Rejected {
                message: "No logs in the last 30 days".to_string()
            }
        );
    }

    #[test]
    fn test_json_failure_without_message_uses_fallback() {
        let body = br#"{"success": false}"#.to_vec();
        assert_eq!(
            classify_report_payload(body),
            ReportPayload::Rejected {
                message: REPORT_REJECTED_FALLBACK.to_string()
            }
        );
    }

    #[test]
    fn test_binary_prefix_is_document() {
        // DOCX files start with the ZIP magic.
        let body = vec![0x50, 0x4b, 0x03, 0x04, 0x00, 0x01, 0x02];
        let classified = classify_report_payload(body.clone());
        assert_eq!(classified, ReportPayload::Document(body));
    }

    #[test]
    fn test_json_success_body_is_document() {
        // Only an explicit failure marker makes the payload an error.
        let body = br#"{"success": true}"#.to_vec();
        assert!(matches!(
            classify_report_payload(body),
            ReportPayload::Document(_)
        ));
    }

    #[test]
    fn test_long_json_past_window_is_document() {
        // A JSON body whose first kilobyte is not a complete value fails
        // the sniff and falls through to the document path, matching the
        // fixed-window contract.
        let mut body = br#"{"success": false, "message": ""#.to_vec();
        body.extend(std::iter::repeat_n(b'x', 2048));
        body.extend_from_slice(br#""}"#);
        assert!(matches!(
            classify_report_payload(body),
            ReportPayload::Document(_)
        ));
    }

    #[test]
    fn test_report_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(report_file_name(date), "scalp-care-report-2026-08-07.docx");
    }
}
