use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    init_tracing();
    fastfinder::cli::run()
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("FASTFINDER_LOG").unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
