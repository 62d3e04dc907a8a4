use axum::{extract::State, response::Json};

use crate::{
    errors::Result,
    handlers::AppState,
    middleware::ValidatedJson,
    models::{AuthResponse, RegisterRequest, SignInRequest},
    services::CredentialService,
};

pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    let identity =
        CredentialService::register(state.database.pool(), &request.username, &request.password).await?;
    let token = state.jwt.generate_token(identity.id, &identity.username)?;

    Ok(Json(AuthResponse {
        user_id: identity.id,
        username: identity.username,
        token,
    }))
}

pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignInRequest>,
) -> Result<Json<AuthResponse>> {
    let identity =
        CredentialService::authenticate(state.database.pool(), &request.username, &request.password).await?;
    let token = state.jwt.generate_token(identity.id, &identity.username)?;

    tracing::info!(user_id = %identity.id, "User signed in");
    Ok(Json(AuthResponse {
        user_id: identity.id,
        username: identity.username,
        token,
    }))
}
