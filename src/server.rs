//! HTTP server initialization and runtime setup.
//!
//! Wires the connection pool, migrations, the length-hint collaborator, the
//! URL service, and the Axum server lifecycle.

use crate::application::services::UrlService;
use crate::config::Config;
use crate::infrastructure::length_hint::{HttpLengthHint, LengthHint, StaticLengthHint};
use crate::infrastructure::persistence::PgUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::random::OsRandom;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the database connection, migrations, bind, or server
/// runtime fail.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let length_hint: Arc<dyn LengthHint> = match &config.length_hint_url {
        Some(endpoint) => Arc::new(HttpLengthHint::new(endpoint.clone())?),
        None => Arc::new(StaticLengthHint::new(config.default_code_length)),
    };

    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    let url_service = Arc::new(UrlService::new(
        repository,
        length_hint,
        CodeGenerator::new(Arc::new(OsRandom)),
        &config.base_url,
    ));

    let state = AppState { url_service };
    let app = app_router(state, &config.allowed_origins());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
