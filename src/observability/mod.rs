//! Logging and tracing.
//!
//! `tracing` events go to stderr through a `fmt` layer. Optionally, spans are
//! also exported through OpenTelemetry to a local JSON-lines file:
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → traces.json
//! ```
//!
//! The trace file rotates at 10 MB and keeps three backups.
//!
//! # Usage
//!
//! ```rust
//! use rolodex::observability::init_tracing;
//! use rolodex::Config;
//!
//! init_tracing(&Config::default())?;
//! tracing::info!("tracing is active");
//! # Ok::<(), rolodex::RolodexError>(())
//! ```

mod exporter;
mod init;

pub use exporter::{create_tracer_provider, FileSpanExporter, RotatingFile};
pub use init::init_tracing;
