use anyhow::Context;
use posts_pipeline::config::Config;
use posts_pipeline::http::{self, AppState};
use posts_pipeline::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    telemetry::init(config.log_format).context("failed to install tracing subscriber")?;

    tracing::info!(
        bind = %config.bind,
        environment = %config.environment,
        "starting posts service"
    );

    let state = AppState::standard(config.environment);
    http::serve(state, config.bind)
        .await
        .context("server exited with an error")?;
    Ok(())
}
