use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "formdrop=debug,tower_http=debug";

/// Initialize tracing with an `EnvFilter` and the fmt layer.
///
/// `RUST_LOG` takes precedence over `default_filter`. Fails if a global
/// subscriber is already installed.
pub fn init_telemetry(default_filter: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.unwrap_or(DEFAULT_FILTER).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::info!("Tracing initialized");
    Ok(())
}

pub async fn shutdown_telemetry() {
    tracing::debug!("Telemetry shutdown");
}
