use anyhow::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initializes the tracing subscriber on stderr.
///
/// Diagnostics go to stderr so stdout stays reserved for the user-facing
/// progress lines and the printed description. `RUST_LOG` overrides the
/// default `warn` filter.
pub fn init_logger() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
