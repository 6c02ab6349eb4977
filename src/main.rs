mod ai;
mod analysis;
mod app;
mod config;
mod domain;
mod infrastructure;
mod report;
mod text;
mod web_content;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use infrastructure::{directories, logging, shutdown};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;

    let (shutdown, listener) = shutdown::Shutdown::new();
    shutdown::install_signal_handlers(shutdown);

    let urls: Vec<String> = std::env::args().skip(1).collect();
    let app = app::PhishGuardApp::initialize(config)?;
    app.run(urls, listener).await
}
