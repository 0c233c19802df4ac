//! CardID Worker Service Entry Point
//!
//! Loads configuration, builds the tokio runtime and starts the HTTP server.

use cardid_worker::config::AppConfig;
use cardid_worker::run;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    if config.server.workers > 0 {
        builder.worker_threads(config.server.workers);
    }

    builder.enable_all().build()?.block_on(run(config))
}
