use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{query_builder::Separated, FromRow, Postgres};
use uuid::Uuid;
use validator::Validate;

use super::resource::ResourceKind;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SqlDatabase {
    pub id: Uuid,
    #[serde(skip)]
    pub user_id: Uuid,
    pub name: String,
    pub username: String,
    // Stored as submitted; never serialized.
    #[serde(skip)]
    pub password: String,
    pub quantity: i32,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SqlDatabaseRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 63))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
    #[validate(range(min = 1, max = 100))]
    pub quantity: i32,
}

impl ResourceKind for SqlDatabase {
    type Payload = SqlDatabaseRequest;

    const TABLE: &'static str = "sql_databases";
    const KIND: &'static str = "SQL database";
    const COLUMNS: &'static [&'static str] = &["name", "username", "password", "quantity"];

    fn push_binds(payload: &SqlDatabaseRequest, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values.push_bind(payload.name.clone());
        values.push_bind(payload.username.clone());
        values.push_bind(payload.password.clone());
        values.push_bind(payload.quantity);
    }
}
