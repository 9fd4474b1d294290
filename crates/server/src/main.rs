use anyhow::{Context, Result};
use athena_config::{Config, ConfigManager};
use athena_database::DatabaseConfig;
use athena_library::LibraryManager;
use athena_network::{Client, ClientConfig};
use athena_server::{router, AppState};
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;
use std::sync::Arc;

fn build_cli() -> Command {
    Command::new("athena")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reading backend serving public-domain book text")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("bind")
                .short('b')
                .long("bind")
                .value_name("ADDR")
                .help("Address to listen on, overriding the configuration"),
        )
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .value_name("PATH")
                .help("Path to the database file, overriding the configuration"),
        )
}

fn load_config(matches: &ArgMatches) -> Result<Config> {
    let manager = match matches.get_one::<String>("config") {
        Some(path) => ConfigManager::with_file(PathBuf::from(path)),
        None => ConfigManager::new().context("Failed to locate configuration directory")?,
    };

    let mut config = manager
        .load_with_env_overrides()
        .with_context(|| format!("Failed to load {}", manager.config_path().display()))?;

    if let Some(bind) = matches.get_one::<String>("bind") {
        config.server.bind = bind.clone();
    }
    if let Some(path) = matches.get_one::<String>("database") {
        config.database.path = path.clone();
    }

    if let Err(errors) = config.validate() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("Invalid configuration: {}", messages.join("; "));
    }
    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown requested");
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = load_config(&matches)?;

    let default_level = config.server.log_level.to_string();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let db_config = DatabaseConfig::new(&config.database.path)
        .with_max_connections(config.database.max_connections)
        .with_wal(config.database.enable_wal);
    let pool = athena_database::open(db_config)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.path))?;

    let client = Client::with_config(ClientConfig {
        timeout: std::time::Duration::from_secs(config.sources.api_timeout_secs),
        ..ClientConfig::default()
    })
    .context("Failed to build HTTP client")?;

    let library = LibraryManager::new(&config, pool.clone(), Arc::new(client));
    let app = router(AppState::new(library));

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    log::info!("Athena listening on {}", config.server.bind);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    athena_database::close(pool).await;
    log::info!("Database closed");
    served.context("Server error")
}
