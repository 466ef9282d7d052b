use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
    Registry,
};

/// Installs the global subscriber for a lesson binary.
///
/// Logs go to stderr so that each program's stdout stays a single line of
/// output. Only warnings are shown unless `RUST_LOG` asks for more.
pub fn init_tracing() -> Result<(), TryInitError> {
    Registry::default()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
