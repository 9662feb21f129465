//! Terminal panel over the sync status reconciler.

mod cli;
mod render;

use std::fs;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use periscope_core::config::EnvironmentTable;
use periscope_core::constants::{PREF_PREVIEW_ENABLED, PREF_SERVER};
use periscope_core::models::ApiVersion;
use periscope_core::traits::PrefStore;
use periscope_engine::Reconciler;
use periscope_remote::{HttpClient, HttpClientConfig, HttpInventory, HttpSyncClient};
use periscope_store::{CollectionSettings, JsonPrefs, SettingsCache, StoreConnection};

use crate::cli::{Cli, Command};

type Panel = Reconciler<HttpInventory, SettingsCache, HttpSyncClient, JsonPrefs>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    periscope_core::trace::init_tracing();
    let args = Cli::parse();

    let table = match &args.environments {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            EnvironmentTable::from_toml(&text)?
        }
        None => EnvironmentTable::default(),
    };

    fs::create_dir_all(&args.data_dir)
        .with_context(|| format!("creating {}", args.data_dir.display()))?;
    let prefs = JsonPrefs::load(args.data_dir.join("prefs.json"))?;

    let server_url = prefs
        .get_string(PREF_SERVER)
        .unwrap_or_else(|| format!("{}/v1", table.prod.server_root));
    let preview_mode = prefs.get_bool(PREF_PREVIEW_ENABLED).unwrap_or(false);

    let conn = Arc::new(StoreConnection::open(&args.data_dir.join("cache.sqlite"))?);
    let cache = SettingsCache::new(conn.clone());
    let settings = CollectionSettings::new(conn);

    let http = HttpClient::new(HttpClientConfig::new(server_url))?;
    let inventory = HttpInventory::new(http.clone(), preview_mode, settings.clone());
    let sync = HttpSyncClient::new(http, cache.clone(), settings);

    let panel: Panel = Reconciler::new(inventory, cache, sync, prefs, table);

    match args.command {
        Command::Status { json } => status(&panel, json).await,
        Command::Sync { collection } => sync_collections(&panel, collection.as_deref()).await,
        Command::Delete { collection } => delete_collections(&panel, collection.as_deref()).await,
        Command::Env { name, api } => switch_env(&panel, &name, api),
        Command::Signatures { enabled } => signatures(&panel, enabled).await,
    }
}

async fn status(panel: &Panel, json: bool) -> anyhow::Result<()> {
    let state = panel.compute_state().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        render::print_state(&state);
    }
    Ok(())
}

async fn sync_collections(panel: &Panel, collection: Option<&str>) -> anyhow::Result<()> {
    let mut sync_errors = panel.notifier().subscribe_sync_errors();
    let mut global_errors = panel.notifier().subscribe_global_errors();

    let target = collection.map(cli::parse_collection);
    let outcome = panel.request_sync(target.as_ref()).await;

    while let Ok(error) = sync_errors.try_recv() {
        eprintln!("sync error on {}/{}: {}", error.bucket, error.collection, error.message);
    }
    while let Ok(message) = global_errors.try_recv() {
        eprintln!("error: {message}");
    }

    let report = outcome?;
    println!(
        "synced {} collection(s), {} failure(s)",
        report.completed,
        report.failures.len()
    );
    Ok(())
}

async fn delete_collections(panel: &Panel, collection: Option<&str>) -> anyhow::Result<()> {
    let mut sync_errors = panel.notifier().subscribe_sync_errors();

    let target = collection.map(cli::parse_collection);
    let report = panel.delete_local(target.as_ref()).await?;

    while let Ok(error) = sync_errors.try_recv() {
        eprintln!("delete error on {}/{}: {}", error.bucket, error.collection, error.message);
    }

    println!(
        "cleared {} collection(s), {} failure(s)",
        report.completed,
        report.failures.len()
    );
    Ok(())
}

fn switch_env(panel: &Panel, name: &str, api: ApiVersion) -> anyhow::Result<()> {
    panel.switch_environment(name, api)?;
    println!("switched to {name}; run `periscope status` to inspect it");
    Ok(())
}

async fn signatures(panel: &Panel, enabled: bool) -> anyhow::Result<()> {
    panel.set_signature_verification(enabled).await?;
    println!(
        "signature verification {} on all collections",
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}
