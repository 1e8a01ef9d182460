use measure_backend::{server, types::Environment};
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(environment.tracing_level()).into())
        .from_env_lossy();

    // JSON logs for staging/production, human-readable logs for development
    if environment.json_logs() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }

    debug!("Starting Body Measurement API in {environment} environment");

    server::start(&environment).await
}
