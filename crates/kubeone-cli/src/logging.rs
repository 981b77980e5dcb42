use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// The environment variable holding the log filter directives.
pub const LOG_ENV: &str = "KUBEONE_LOG";

/// Installs the global subscriber, which logs to stderr.
///
/// Directives from [`LOG_ENV`] take precedence. Without them everything at
/// INFO and above is logged, or at DEBUG and above if `verbose` is set.
pub fn initialize_logging(verbose: bool) -> Result<(), TryInitError> {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter = EnvFilter::builder()
        .with_env_var(LOG_ENV)
        .with_default_directive(default_level.into())
        .from_env_lossy();
    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    Registry::default().with(filter).with(fmt).try_init()
}
