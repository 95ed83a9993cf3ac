use anyhow::Context;
use clap::Parser;
use shop_admin::cli::Cli;
use shop_admin::logging::init_tracing;
use shop_admin::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("Invalid configuration")?;
    let log_path = init_tracing(&config.logging).context("Failed to open log file")?;
    tracing::info!(log = %log_path.display(), "Starting shop-admin");

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = runtime::run(config, rt.handle().clone());
    rt.shutdown_timeout(std::time::Duration::from_secs(1));
    if let Err(err) = &result {
        tracing::error!(error = %err, "UI terminated with error");
    }
    result.context("Terminal UI failed")
}
