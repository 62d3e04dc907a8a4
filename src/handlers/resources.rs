//! CRUD handlers shared by every resource kind. Each kind is mounted with
//! [`routes`], e.g. `routes::<Lambda>()` under `/lambdas`.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    database::queries::ResourceQueries,
    errors::{AppError, Result},
    handlers::AppState,
    middleware::{AuthenticatedUser, ValidatedJson},
    models::ResourceKind,
};

pub fn routes<R: ResourceKind>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/:id", get(fetch::<R>).put(update::<R>).delete(delete::<R>))
}

/// Ids that are not UUIDs cannot name a row, so they read as missing.
fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

pub async fn create<R: ResourceKind>(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<R::Payload>,
) -> Result<Json<R>> {
    let created = ResourceQueries::<R>::create(state.database.pool(), user.id, &payload).await?;

    tracing::info!(user_id = %user.id, username = %user.username, kind = R::KIND, "Created resource");
    state.metrics.record_operation(R::KIND, "create");
    Ok(Json(created))
}

pub async fn list<R: ResourceKind>(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<R>>> {
    let rows = ResourceQueries::<R>::list(state.database.pool(), user.id, None).await?;

    tracing::debug!(user_id = %user.id, kind = R::KIND, count = rows.len(), "Listed resources");
    state.metrics.record_operation(R::KIND, "list");
    Ok(Json(rows))
}

pub async fn fetch<R: ResourceKind>(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<Json<R>> {
    let id = parse_id(&id)?;
    let row = ResourceQueries::<R>::find(state.database.pool(), user.id, id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(user_id = %user.id, %id, kind = R::KIND, "Resource not found");
            AppError::NotFound
        })?;

    state.metrics.record_operation(R::KIND, "get");
    Ok(Json(row))
}

pub async fn update<R: ResourceKind>(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<R::Payload>,
) -> Result<Json<R>> {
    let id = parse_id(&id)?;
    let updated = ResourceQueries::<R>::update(state.database.pool(), user.id, id, &payload).await?;

    tracing::info!(user_id = %user.id, username = %user.username, %id, kind = R::KIND, "Updated resource");
    state.metrics.record_operation(R::KIND, "update");
    Ok(Json(updated))
}

pub async fn delete<R: ResourceKind>(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let id = parse_id(&id)?;
    ResourceQueries::<R>::soft_delete(state.database.pool(), user.id, id).await?;

    tracing::info!(user_id = %user.id, username = %user.username, %id, kind = R::KIND, "Deleted resource");
    state.metrics.record_operation(R::KIND, "delete");
    Ok(Json(json!({
        "message": format!("{} deleted", R::KIND)
    })))
}
