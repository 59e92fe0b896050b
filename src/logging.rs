use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let filter_layer = EnvFilter::try_new(filter).context("invalid tracing filter")?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .context("tracing subscriber already installed")?;

    Ok(())
}
