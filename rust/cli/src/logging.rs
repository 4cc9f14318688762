//! Logging setup and a capturing layer for tests.
//!
//! Logs go to stderr so they never mix with report output on stdout.
//! The level comes from `RUST_LOG`; without it only warnings are shown.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging for the application. Later calls are no-ops.
pub fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// Structured log entry captured by [`TestLogSubscriber`].
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

/// Collects log entries so tests can assert on them.
#[derive(Debug, Clone, Default)]
pub struct TestLogSubscriber {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn into_layer<S>(self) -> TestLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        TestLayer {
            subscriber: self,
            _phantom: PhantomData,
        }
    }
}

pub struct TestLayer<S> {
    subscriber: TestLogSubscriber,
    _phantom: PhantomData<S>,
}

impl<S> Layer<S> for TestLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        };

        if let Ok(mut entries) = self.subscriber.entries.lock() {
            entries.push(entry);
        }
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value_str = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value_str);
        } else {
            self.fields.push((field.name().to_string(), value_str));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    #[test]
    fn init_logging_twice_is_harmless() {
        init_logging();
        init_logging();
    }

    #[test]
    fn deal_logs_its_seed() {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());

        tracing::subscriber::with_default(registry, || {
            let mut out: Vec<u8> = Vec::new();
            crate::commands::handle_deal_command(Some(99), OutputFormat::Text, false, &mut out)
                .unwrap();
        });

        let entries = subscriber.entries();
        assert!(entries
            .iter()
            .any(|e| e.level == Level::INFO && e.fields.iter().any(|(k, v)| k == "seed" && v == "99")));
    }

    #[test]
    #[serial_test::serial]
    fn enumeration_passes_log_a_summary() {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());

        tracing::subscriber::with_default(registry, || {
            let mut out: Vec<u8> = Vec::new();
            let mut err: Vec<u8> = Vec::new();
            crate::run(["omaha", "calc", "AsAhKsKh", "AdKdTd"], &mut out, &mut err);
        });

        let entries = subscriber.entries();
        let better = entries
            .iter()
            .find(|e| e.message.contains("better-hands pass finished"))
            .expect("better-hands summary");
        assert_eq!(better.level, Level::DEBUG);
        assert!(better.target.starts_with("omaha_engine"));
        assert!(better.fields.iter().any(|(k, v)| k == "trials" && v == "990"));
        assert!(better.fields.iter().any(|(k, _)| k == "elapsed_ms"));
    }
}
