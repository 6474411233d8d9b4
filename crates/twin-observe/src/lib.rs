//! Observability setup for Twin: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
