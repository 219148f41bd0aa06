//! Tracing subscriber setup.

use super::exporter;
use crate::domain::Result;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "rolodex";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.trace_level`, otherwise `info`. Events are printed to stderr.
/// When `config.trace_file` is set, spans are additionally exported to that
/// file as JSON lines.
///
/// Calling this more than once is harmless; only the first call installs a
/// subscriber.
///
/// # Errors
///
/// Returns [`RolodexError::Io`](crate::RolodexError::Io) if the trace file's
/// directory cannot be created.
pub fn init_tracing(config: &Config) -> Result<()> {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let otel_layer = match &config.trace_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let provider = exporter::create_tracer_provider(path.clone(), SERVICE_NAME);
            Some(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        }
        None => None,
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init();

    Ok(())
}
