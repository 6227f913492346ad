//! Colorful console output for filtermaker events.
//!
//! Provides a custom `tracing` layer that formats registry and evaluation
//! events with colors.
//!
//! ## Log Levels
//!
//! - **DEBUG**: Registration and battery evaluation
//! - **TRACE**: Individual property evaluations and short-circuit skips
//!
//! The default filter shows DEBUG events from `filtermaker_core`; set
//! `RUST_LOG=filtermaker_core=trace` to see every evaluation.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Directives used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVES: &str = "filtermaker_core=debug";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect. Does
/// nothing if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(FilterConsoleLayer)
            .try_init();
    });
}

// Returns seconds since the console was initialized or first used.
fn elapsed_secs() -> f64 {
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// A tracing layer that formats filtermaker events with colors.
pub struct FilterConsoleLayer;

impl<S: Subscriber> Layer<S> for FilterConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if let Some(output) = render(event) {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

/// Renders a filtermaker event as one console line. Events from other
/// targets and unknown event kinds give `None`.
fn render(event: &Event<'_>) -> Option<String> {
    if !event.metadata().target().starts_with("filtermaker") {
        return None;
    }

    let mut visitor = EventVisitor::default();
    event.record(&mut visitor);

    let output = format_event(&visitor);
    (!output.is_empty()).then_some(output)
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    property: Option<String>,
    result: Option<bool>,
    replaced: Option<bool>,
    requested: Option<u64>,
    confirmed: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "property" => self.property = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "requested" => self.requested = Some(value),
            "confirmed" => self.confirmed = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "result" => self.result = Some(value),
            "replaced" => self.replaced = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "property" => self.property = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "property_registered" => format_registered(v),
        "property_evaluated" => format_evaluated(v),
        "property_skipped" => format_skipped(v),
        "battery_evaluated" => format_battery(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_property(v: &EventVisitor) -> String {
    v.property
        .as_deref()
        .unwrap_or("?")
        .white()
        .bold()
        .to_string()
}

fn format_registered(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} registered {}",
        format_elapsed(),
        "+".bright_cyan().bold(),
        format_property(v)
    );
    if v.replaced.unwrap_or(false) {
        output.push_str(&format!(" │ {}", "replaced".yellow()));
    }
    output
}

fn format_evaluated(v: &EventVisitor) -> String {
    let icon = if v.result.unwrap_or(false) {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };
    format!("{} {} {}", format_elapsed(), icon, format_property(v))
}

fn format_skipped(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {}",
        format_elapsed(),
        "↷".bright_black(),
        format_property(v),
        "skipped".bright_black()
    )
}

fn format_battery(v: &EventVisitor) -> String {
    let requested = v.requested.unwrap_or(0);
    let confirmed = v.confirmed.unwrap_or(0);
    format!(
        "{} {} battery │ {} requested │ {} confirmed",
        format_elapsed(),
        "■".bright_blue().bold(),
        requested.bright_yellow(),
        confirmed.bright_green()
    )
}
