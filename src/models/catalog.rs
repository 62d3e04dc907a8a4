use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A resource type that can be provisioned. Rows are seeded, never written here.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatalogEntry {
    pub id: Uuid,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip)]
    pub available: bool,
}
