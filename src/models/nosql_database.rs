use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{query_builder::Separated, FromRow, Postgres};
use uuid::Uuid;
use validator::Validate;

use super::resource::ResourceKind;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NoSqlDatabase {
    pub id: Uuid,
    #[serde(skip)]
    pub user_id: Uuid,
    pub name: String,
    pub shards: i32,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NoSqlDatabaseRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 1, max = 64))]
    pub shards: i32,
}

impl ResourceKind for NoSqlDatabase {
    type Payload = NoSqlDatabaseRequest;

    const TABLE: &'static str = "nosql_databases";
    const KIND: &'static str = "NoSQL database";
    const COLUMNS: &'static [&'static str] = &["name", "shards"];

    fn push_binds(payload: &NoSqlDatabaseRequest, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values.push_bind(payload.name.clone());
        values.push_bind(payload.shards);
    }
}
