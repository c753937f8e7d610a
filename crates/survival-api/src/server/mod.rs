use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Request, State};
use axum::http::header::{HeaderName, HeaderValue};
use axum::http::Method;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use contracts::{ErrorBody, NewLeaderboardEntry, SurvivorView};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::{GameApi, GameConfig, GameError};

const API_PREFIX: &str = "/api";

include!("error.rs");
include!("state.rs");
include!("routes/survivors.rs");
include!("routes/leaderboard.rs");
include!("util.rs");

pub async fn serve(addr: SocketAddr, config: GameConfig) -> Result<(), ServerError> {
    let app = router(GameApi::from_config(config));

    let listener = TcpListener::bind(addr).await?;
    log::info!("Server is running on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Full application router. Every route is reachable both at the root and under `/api`.
pub fn router(api: GameApi) -> Router {
    let state = AppState::new(api);
    Router::new()
        .merge(routes())
        .nest(API_PREFIX, routes())
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/survivors", post(create_survivor))
        .route("/survivors/{survivor_id}", get(get_survivor))
        .route("/survivors/{survivor_id}/decisions", post(submit_decision))
        .route("/leaderboard", get(get_leaderboard).post(add_leaderboard_entry))
}

async fn cors_middleware(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = Response::new(axum::body::Body::empty());
        *response.status_mut() = StatusCode::NO_CONTENT;
        apply_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut());
    response
}

#[cfg(test)]
mod tests;
