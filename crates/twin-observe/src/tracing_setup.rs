//! Tracing subscriber initialization with structured logging and optional
//! OpenTelemetry trace export.
//!
//! # Usage
//!
//! ```no_run
//! use twin_observe::tracing_setup::{init_tracing, TracingOptions};
//!
//! // Human-readable logs on stderr, warnings and above
//! init_tracing(&TracingOptions::default()).unwrap();
//! ```
//!
//! Logs always go to stderr so that command output on stdout stays clean.
//! The OpenTelemetry stdout exporter is the exception: it is meant for local
//! debugging and writes spans to stdout.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use std::sync::OnceLock;

/// Stores the OTel tracer provider so it can be shut down cleanly on exit.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// How the global subscriber should be configured.
#[derive(Debug, Clone)]
pub struct TracingOptions {
    /// Filter directives used when `RUST_LOG` is not set.
    pub default_filter: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
    /// Bridge spans to OpenTelemetry with a stdout exporter.
    pub otel: bool,
}

impl Default for TracingOptions {
    fn default() -> Self {
        Self {
            default_filter: "warn".to_string(),
            json: false,
            otel: false,
        }
    }
}

impl TracingOptions {
    /// Map CLI verbosity flags to a default filter.
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let filter = match verbose {
            0 if quiet => "error",
            0 => "warn",
            1 => "info,twin=debug",
            _ => "trace",
        };
        Self {
            default_filter: filter.to_string(),
            ..Self::default()
        }
    }
}

/// Build the filter: `RUST_LOG` wins, otherwise `options.default_filter`.
fn build_filter(options: &TracingOptions) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&options.default_filter))
}

/// Initialize the global tracing subscriber.
///
/// - Always installs a structured `fmt` layer on stderr with target
///   visibility and span close timing (text or JSON).
/// - When `options.otel` is true, additionally bridges tracing spans to
///   OpenTelemetry using a stdout exporter.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(options: &TracingOptions) -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = if options.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .boxed()
    };

    let env_filter = build_filter(options);

    if options.otel {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer("twin");
        let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

        // Store the provider for shutdown and register it globally.
        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(env_filter)
            .with(otel_layer)
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(env_filter)
            .try_init()?;
    }

    Ok(())
}

/// Flush pending traces and shut down the OpenTelemetry tracer provider.
///
/// Safe to call even when OTel was not enabled (no-op in that case).
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: OTel tracer provider shutdown error: {e}");
        }
    }
}
