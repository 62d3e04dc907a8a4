use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON body that has been deserialized and passed its `validator` rules.
/// Both failure kinds surface as 400.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::info!("Unable to parse request body: {}", rejection.body_text());
            AppError::Validation(rejection.body_text())
        })?;

        value.validate().map_err(|e| {
            tracing::info!("Invalid request body: {}", e);
            AppError::from(e)
        })?;

        Ok(Self(value))
    }
}
