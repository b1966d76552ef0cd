use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub user_status: i32,
}

/// Body of every response from `/v2/user`, success or failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: u16,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

/// Created users in arrival order. Duplicates are kept.
pub type Store = Arc<RwLock<Vec<User>>>;

pub fn app() -> Router {
    app_with_store(Store::default())
}

pub fn app_with_store(store: Store) -> Router {
    Router::new()
        .route("/v2/user", post(create_user))
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_store(listener, Store::default()).await
}

pub async fn run_with_store(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_store(store)).await
}

async fn create_user(
    State(store): State<Store>,
    payload: Result<Json<User>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse>) {
    let user = match payload {
        Ok(Json(user)) => user,
        Err(rejection) => {
            let status = rejection.status();
            warn!(status = status.as_u16(), reason = %rejection.body_text(), "rejected user payload");
            return (
                status,
                Json(ApiResponse {
                    code: status.as_u16(),
                    kind: "error".to_string(),
                    message: rejection.body_text(),
                }),
            );
        }
    };

    info!(id = user.id, username = %user.username, "user created");
    let message = user.id.to_string();
    store.write().await.push(user);
    (
        StatusCode::OK,
        Json(ApiResponse {
            code: StatusCode::OK.as_u16(),
            kind: "unknown".to_string(),
            message,
        }),
    )
}
