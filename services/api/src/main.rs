use anyhow::Context as _;
use axum::ServiceExt;
use axum::extract::Request;
use tokio::net::TcpListener;
use tracing::info;

use restful_api::config::ApiConfig;
use restful_api::infra::crypto::PasswordHasher;
use restful_api::infra::store::{FileStore, TOKENS, USERS};
use restful_api::router::{App, build_router};
use restful_api::state::AppState;
use restful_core::config::Config;
use restful_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ApiConfig::from_env().context("failed to load config from environment")?;
    let environment = config.environment();

    let store = FileStore::new(&config.data_dir);
    store
        .ensure_collections(&[USERS, TOKENS])
        .await
        .with_context(|| format!("failed to prepare {}", config.data_dir.display()))?;

    let state = AppState {
        store,
        hasher: PasswordHasher::new(config.hashing_secret()),
    };
    let app = build_router(state);

    // Both listeners serve the same routes; TLS for the second one is
    // terminated upstream.
    let http = bind(config.http_port()).await?;
    let https = bind(config.https_port()).await?;
    info!(
        env = environment.name(),
        http_port = config.http_port(),
        https_port = config.https_port(),
        "api service listening"
    );

    tokio::try_join!(serve(http, app.clone()), serve(https, app))?;
    Ok(())
}

async fn bind(port: u16) -> anyhow::Result<TcpListener> {
    let addr = format!("0.0.0.0:{port}");
    TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

async fn serve(listener: TcpListener, app: App) -> anyhow::Result<()> {
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .context("server error")
}
