use serde::{de::DeserializeOwned, Serialize};
use sqlx::{postgres::PgRow, query_builder::Separated, FromRow, Postgres};
use validator::Validate;

/// Describes one owner-scoped resource table.
///
/// Every kind shares the bookkeeping columns `id`, `user_id`, `created_at`,
/// `updated_at` and `deleted_at`; `COLUMNS` lists only the client-mutable ones,
/// in the order `push_binds` binds them.
pub trait ResourceKind:
    for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static
{
    type Payload: DeserializeOwned + Validate + Send + Sync + 'static;

    const TABLE: &'static str;
    /// Human readable name, used in logs and responses.
    const KIND: &'static str;
    const COLUMNS: &'static [&'static str];

    fn push_binds(payload: &Self::Payload, values: &mut Separated<'_, '_, Postgres, &'static str>);
}

/// `id, user_id, <columns>, created_at, updated_at, deleted_at`
pub fn select_columns<R: ResourceKind>() -> String {
    let mut columns = vec!["id", "user_id"];
    columns.extend_from_slice(R::COLUMNS);
    columns.extend_from_slice(&["created_at", "updated_at", "deleted_at"]);
    columns.join(", ")
}
