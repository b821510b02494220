use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use schedule_client::config::Config;
use schedule_client::logging::init_tracing;
use schedule_client::{AppState, EffectRuntime, HttpGateway, Store, Translator};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(locale) = &cli.locale {
        config.i18n.locale = locale.clone();
    }
    config.validate()?;

    let command = cli.domain.command()?;

    let translator = match &config.i18n.dictionary_path {
        Some(path) => Translator::with_overrides(&config.i18n.locale, path)?,
        None => Translator::new(&config.i18n.locale)?,
    };
    let gateway = HttpGateway::new(&config.api).context("Failed to create API client")?;
    tracing::info!(base_url = %gateway.base_url(), kind = %command.kind(), "Running command");

    let runtime = EffectRuntime::new(Arc::new(gateway), Arc::new(translator));
    let store = Store::spawn(AppState::default(), runtime, config.store.queue_capacity);

    if let Some(preload) = cli.domain.preload(&command) {
        store.dispatch(preload).await?;
        store.until_idle().await?;
    }
    store.dispatch(command).await?;
    let state = store.until_idle().await?;

    let slice = cli.domain.slice(&state)?;
    println!("{}", serde_json::to_string_pretty(&slice)?);

    let notification = &state.notification;
    if notification.open {
        eprintln!("{}", notification.message);
    }
    if notification.is_error() || state.auth.error.is_some() {
        if let Some(error) = &state.auth.error {
            eprintln!("{}", error);
        }
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
