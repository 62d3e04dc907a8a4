use axum::{extract::State, response::Json};

use crate::{database::queries::CatalogQueries, errors::Result, handlers::AppState, models::CatalogEntry};

pub async fn list_available(State(state): State<AppState>) -> Result<Json<Vec<CatalogEntry>>> {
    let entries = CatalogQueries::list_available(state.database.pool()).await?;
    Ok(Json(entries))
}
