//! OpenTelemetry tracing with file-based span export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → OTLP JSON lines
//! ```
//!
//! Spans land in `~/.local/share/zellij/bookfinder/bookfinder-otlp.json`, one
//! OTLP JSON document per line. The file is capped in size and keeps a single
//! `.1` backup.
//!
//! The filter comes from the `trace_level` plugin option and defaults to
//! `info`. Any `EnvFilter` directive works, e.g. `bookfinder=debug`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and size-capped trace file
//! - [`span_formatter`]: OTLP JSON serialization

mod exporter;
mod init;
mod span_formatter;

pub use init::init_tracing;
