use anyhow::{bail, Context};
use clap::Parser;

use folio::chat::build_client;
use folio::cli::Cli;
use folio::config::Config;
use folio::logging::init_tracing;
use folio::ui::app::AppOptions;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file '{}' does not exist", path.display());
            }
            Config::load_from(path)?
        }
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let chat = build_client(&config.chat, cli.offline);

    if let Some(question) = cli.ask.as_deref() {
        let reply = runtime.block_on(chat.send_message(question, ""));
        println!("{}", reply);
        return Ok(());
    }

    let chat_online = !cli.offline && config.chat.is_configured();
    let options = AppOptions::from_config(&config, cli.section, chat_online);
    folio::ui::runtime::run(options, chat, runtime.handle().clone())
        .context("terminal UI failed")?;

    tracing::info!("Exited cleanly");
    Ok(())
}
