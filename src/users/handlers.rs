use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    error::AppError,
    state::AppState,
    users::{
        dto::UserPayload,
        extractors::{JsonBody, UserId},
        password::hash_password,
        repo_types::User,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, AppError> {
    let user = state.store.get_user(id).await?.ok_or_else(|| {
        warn!(user_id = id, "user not found");
        AppError::NotFound
    })?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<Json<User>, AppError> {
    let hash = hash_password(&payload.password)?;
    let id = state
        .store
        .insert_user(&payload.name, &payload.email, &hash)
        .await?;

    info!(user_id = id, "user created");
    Ok(Json(payload.into_user(id)))
}

/// Overwrites every column. The password is stored as sent, without hashing;
/// only creation hashes.
#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<Json<User>, AppError> {
    let affected = state
        .store
        .update_user(id, &payload.name, &payload.email, payload.password.as_bytes())
        .await?;
    if affected == 0 {
        warn!(user_id = id, "update on missing user");
        return Err(AppError::NotFound);
    }

    info!(user_id = id, "user updated");
    Ok(Json(payload.into_user(id)))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<StatusCode, AppError> {
    let affected = state.store.delete_user(id).await?;
    if affected == 0 {
        warn!(user_id = id, "delete on missing user");
        return Err(AppError::NotFound);
    }

    info!(user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
