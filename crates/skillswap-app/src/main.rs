mod command;
mod config;
mod service;
mod terminal;

use anyhow::Result;
use crate::config::Config;
use crate::service::SkillswapService;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Create and run the page
    let service = SkillswapService::new(config);
    service.run().await
}
