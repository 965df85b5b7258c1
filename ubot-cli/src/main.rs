//! ubot CLI: run the bot, or list the built-in modules. Config from env and optional CLI args.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use ubot_cli::{load_modules, AppConfig, BotConfig, Cli, Commands};
use ubot_core::init_tracing;
use ubot_telegram::run_repl;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => run(token).await,
        Commands::Modules => list_modules(),
    }
}

async fn run(token: Option<String>) -> Result<()> {
    let config = BotConfig::load(token)?;
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        lang = %config.app.lang,
        trigger = %config.app.trigger,
        policy = ?config.app.policy(),
        "Starting ubot"
    );

    let loaded = load_modules(&config.app)?;
    let bot = config.telegram.build_bot()?;
    run_repl(bot, Arc::new(loaded.handler), config.telegram.owner()).await
}

fn list_modules() -> Result<()> {
    let app = AppConfig::from_env()?;
    app.validate()?;

    let loaded = load_modules(&app)?;
    let registries = &loaded.registries;

    for id in &loaded.report.loaded {
        let description = registries.module_desc(id).unwrap_or_default();
        println!("{} - {}", id, description);
        for (command, usage) in registries.commands_of(id) {
            match usage {
                Some(usage) => {
                    let args = usage.args.map(|a| format!(" {}", a)).unwrap_or_default();
                    println!("  {}{}{}  {}", app.trigger, command, args, usage.usage);
                }
                None => println!("  {}{}", app.trigger, command),
            }
        }
    }
    for id in &loaded.report.skipped {
        println!("{} (disabled)", id);
    }
    for (id, reason) in &loaded.report.failed {
        println!("{} (failed: {})", id, reason);
    }
    Ok(())
}
