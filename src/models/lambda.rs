use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{query_builder::Separated, FromRow, Postgres};
use uuid::Uuid;
use validator::Validate;

use super::resource::ResourceKind;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lambda {
    pub id: Uuid,
    #[serde(skip)]
    pub user_id: Uuid,
    pub name: String,
    pub concurrent_limit: i32,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LambdaRequest {
    #[validate(length(min = 5, max = 200))]
    pub name: String,
    #[validate(range(min = 1, max = 200))]
    pub concurrent_limit: i32,
}

impl ResourceKind for Lambda {
    type Payload = LambdaRequest;

    const TABLE: &'static str = "lambdas";
    const KIND: &'static str = "Lambda";
    const COLUMNS: &'static [&'static str] = &["name", "concurrent_limit"];

    fn push_binds(payload: &LambdaRequest, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values.push_bind(payload.name.clone());
        values.push_bind(payload.concurrent_limit);
    }
}
