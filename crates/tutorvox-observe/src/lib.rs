//! Observability setup for tutorvox: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
