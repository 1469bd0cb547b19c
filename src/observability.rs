use tracing_subscriber::{prelude::*, EnvFilter};

/// Installs the global subscriber. Output goes to stderr so stdout stays free
/// for the interactive session. `RUST_LOG` wins over `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level))
        .add_directive("hyper=off".parse().unwrap())
        .add_directive("h2=off".parse().unwrap());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
