#![forbid(unsafe_code)]

use armory_server::{build_router, AppState, ServerConfig};
use armory_store::{compute_dataset_info, load_dataset};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_path(name: &str, default: &str) -> PathBuf {
    PathBuf::from(env::var(name).unwrap_or_else(|_| default.to_string()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("ARMORY_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let config = ServerConfig {
        bind: env::var("ARMORY_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        data_root: env_path("ARMORY_DATA_ROOT", "assets/data"),
        images_root: env_path("ARMORY_IMAGES_ROOT", "assets/images"),
        cache_ttl: Duration::from_secs(env_u64("ARMORY_CACHE_TTL_SECS", 300)),
    };

    let (index, report) = load_dataset(&config.data_root)
        .await
        .map_err(|e| format!("dataset load failed: {e}"))?;
    for (kind, stats) in [
        ("characters", report.characters),
        ("weapons", report.weapons),
    ] {
        info!(
            kind,
            discovered = stats.discovered,
            loaded = stats.loaded,
            bad = stats.bad,
            collisions = stats.collisions,
            "dataset kind loaded"
        );
    }
    let info = compute_dataset_info(&config.data_root, &index, &report).await;

    let bind = config.bind.clone();
    let state = AppState::new(index, info, config);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind)
        .await
        .map_err(|e| format!("bind {bind} failed: {e}"))?;
    info!("armory-server listening on {bind}");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
