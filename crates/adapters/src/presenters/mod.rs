use partial_pages_application::{ApplicationError, CheckOutcome};
use partial_pages_domain::WidthScanReport;
use serde_json::json;

pub fn present_width_report(report: &WidthScanReport) -> String {
    format!(
        "width {}: inspected={}, removed={}",
        report.width, report.pages_inspected, report.pages_removed
    )
}

pub fn present_check_outcome(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::AlreadyChecked => "partial page check already performed".to_string(),
        CheckOutcome::Completed(report) => {
            let mut lines = vec![format!(
                "partial page check finished: removed={}",
                report.total_removed()
            )];
            lines.extend(report.widths.iter().map(present_width_report));
            lines.join("\n")
        }
        CheckOutcome::Failed(message) => {
            format!("partial page check failed, will retry next run: {message}")
        }
    }
}

pub fn present_outcome_json(outcome: &CheckOutcome) -> Result<String, ApplicationError> {
    let value = match outcome {
        CheckOutcome::AlreadyChecked => json!({ "status": "already_checked" }),
        CheckOutcome::Completed(report) => {
            let report = serde_json::to_value(report)
                .map_err(|error| ApplicationError::Serialization(error.to_string()))?;
            json!({ "status": "completed", "report": report })
        }
        CheckOutcome::Failed(message) => json!({ "status": "failed", "error": message }),
    };
    serde_json::to_string_pretty(&value)
        .map_err(|error| ApplicationError::Serialization(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use partial_pages_domain::{CheckReport, WidthTag};

    fn report() -> CheckReport {
        CheckReport {
            widths: vec![WidthScanReport {
                width: WidthTag::new("_1920").expect("tag"),
                pages_inspected: 601,
                pages_removed: 2,
                removed_pages: vec![17, 240],
            }],
        }
    }

    #[test]
    fn completed_outcome_lists_each_width() {
        let text = present_check_outcome(&CheckOutcome::Completed(report()));
        assert_eq!(
            text,
            "partial page check finished: removed=2\nwidth _1920: inspected=601, removed=2"
        );
    }

    fn parse(outcome: &CheckOutcome) -> serde_json::Value {
        let json = present_outcome_json(outcome).expect("json");
        serde_json::from_str(&json).expect("parse")
    }

    #[test]
    fn completed_json_uses_plain_width_strings() {
        let value = parse(&CheckOutcome::Completed(report()));
        assert_eq!(value["status"], "completed");
        assert_eq!(value["report"]["widths"][0]["width"], "_1920");
        assert_eq!(value["report"]["widths"][0]["removed_pages"][1], 240);
    }

    #[test]
    fn every_outcome_has_a_json_form() {
        assert_eq!(
            parse(&CheckOutcome::AlreadyChecked),
            json!({ "status": "already_checked" })
        );
        assert_eq!(
            parse(&CheckOutcome::Failed("decode error: page005.png".to_string())),
            json!({ "status": "failed", "error": "decode error: page005.png" })
        );
    }
}
