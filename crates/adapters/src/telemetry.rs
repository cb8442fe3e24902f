use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use partial_pages_application::{Clock, TelemetryEvent, TelemetrySink};
use serde_json::{json, Value};
use tracing::{info, warn};

/// Emits events through the log stream only.
#[derive(Debug, Default)]
pub struct LogTelemetrySink;

impl TelemetrySink for LogTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let attributes = Value::Object(event.attributes);
        info!(event = %event.name, %attributes, "telemetry event");
    }
}

/// Appends one JSON object per event to a local file.
pub struct JsonlTelemetrySink {
    path: PathBuf,
    clock: Box<dyn Clock>,
}

impl JsonlTelemetrySink {
    pub fn new(path: impl Into<PathBuf>, clock: Box<dyn Clock>) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl TelemetrySink for JsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let line = json!({
            "name": event.name,
            "recorded_at": self.clock.now_timestamp_string(),
            "attributes": Value::Object(event.attributes),
        })
        .to_string();

        if let Err(error) = self.append(&line) {
            warn!(path = %self.path.display(), %error, "dropping telemetry event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now_timestamp_string(&self) -> String {
            "2026-10-16T08:00:00Z".to_string()
        }
    }

    #[test]
    fn appends_one_line_per_event() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("telemetry").join("events.jsonl");
        let sink = JsonlTelemetrySink::new(&path, Box::new(FixedClock));

        sink.record(
            TelemetryEvent::new("partialPagesRemoved")
                .with_attribute("pagesRemoved", 2)
                .with_attribute("width", "_1920"),
        );
        sink.record(TelemetryEvent::new("partialPagesRemoved").with_attribute("width", "_1280"));

        let content = fs::read_to_string(&path).expect("read");
        let lines: Vec<Value> = content
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["name"], "partialPagesRemoved");
        assert_eq!(lines[0]["recorded_at"], "2026-10-16T08:00:00Z");
        assert_eq!(lines[0]["attributes"]["pagesRemoved"], 2);
        assert_eq!(lines[1]["attributes"]["width"], "_1280");
    }

    #[test]
    fn unwritable_path_is_swallowed() {
        let dir = TempDir::new().expect("tempdir");
        // a directory cannot be opened for appending
        let sink = JsonlTelemetrySink::new(dir.path(), Box::new(FixedClock));
        sink.record(TelemetryEvent::new("partialPagesRemoved"));
    }
}
