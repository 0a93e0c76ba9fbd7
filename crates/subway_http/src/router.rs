//! Router assembly and serve loop.

use crate::handlers::{health, lines, stations};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use std::future::Future;
use tokio::net::TcpListener;

/// Builds the router with every catalog route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/line", post(lines::create_line))
        .route("/lines", get(lines::list_lines))
        .route(
            "/lines/{id}",
            get(lines::show_line)
                .put(lines::update_line)
                .delete(lines::delete_line),
        )
        .route(
            "/stations",
            post(stations::create_station).get(stations::list_stations),
        )
        .route(
            "/stations/{id}",
            get(stations::show_station).delete(stations::delete_station),
        )
        .route("/health", get(health::health))
        .with_state(state)
}

/// Serves the catalog on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!("event=http_serve module=http status=start addr={addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("event=http_serve module=http status=stopped addr={addr}");
    Ok(())
}
