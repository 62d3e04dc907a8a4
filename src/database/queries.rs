use std::marker::PhantomData;

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;
use crate::errors::{AppError, Result};
use crate::models::{select_columns, CatalogEntry, ResourceKind, User};

pub struct UserQueries;

impl UserQueries {
    pub async fn create_user(pool: &PgPool, username: &str, password_hash: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, username, password_hash, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Validation("Username is already taken".to_string())
            }
            other => AppError::Database(other),
        })?;

        Ok(user)
    }

    pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM users
            WHERE username = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}

pub struct CatalogQueries;

impl CatalogQueries {
    pub async fn list_available(pool: &PgPool) -> Result<Vec<CatalogEntry>> {
        let entries = sqlx::query_as::<_, CatalogEntry>(
            "SELECT id, name, type, available FROM resources WHERE available = TRUE ORDER BY name",
        )
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }
}

/// Owner-scoped CRUD with soft deletion, shared by every [`ResourceKind`].
///
/// Every statement filters on `user_id`; reads and updates also skip rows
/// whose `deleted_at` is set.
pub struct ResourceQueries<R>(PhantomData<R>);

impl<R: ResourceKind> ResourceQueries<R> {
    pub async fn create(pool: &PgPool, owner_id: Uuid, payload: &R::Payload) -> Result<R> {
        let mut query = Self::insert_query(Uuid::new_v4(), owner_id, payload);
        let created = query.build_query_as::<R>().fetch_one(pool).await?;

        Ok(created)
    }

    /// All live rows of `owner_id`, or at most the one matching `id`.
    pub async fn list(pool: &PgPool, owner_id: Uuid, id: Option<Uuid>) -> Result<Vec<R>> {
        let mut query = Self::select_query(owner_id, id);
        let rows = query.build_query_as::<R>().fetch_all(pool).await?;

        Ok(rows)
    }

    pub async fn find(pool: &PgPool, owner_id: Uuid, id: Uuid) -> Result<Option<R>> {
        let mut rows = Self::list(pool, owner_id, Some(id)).await?;
        Ok(rows.pop())
    }

    pub async fn update(pool: &PgPool, owner_id: Uuid, id: Uuid, payload: &R::Payload) -> Result<R> {
        let mut query = Self::update_query(owner_id, id, payload);
        query
            .build_query_as::<R>()
            .fetch_optional(pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Stamps `deleted_at`. Repeating the call keeps the first timestamp and
    /// still succeeds; ids the owner does not have yield `NotFound`.
    pub async fn soft_delete(pool: &PgPool, owner_id: Uuid, id: Uuid) -> Result<()> {
        let mut query = Self::delete_query(owner_id, id);
        let result = query.build().execute(pool).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    fn insert_query(id: Uuid, owner_id: Uuid, payload: &R::Payload) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(format!(
            "INSERT INTO {} (id, user_id, {}, created_at, updated_at) VALUES (",
            R::TABLE,
            R::COLUMNS.join(", ")
        ));
        {
            let mut values = query.separated(", ");
            values.push_bind(id);
            values.push_bind(owner_id);
            R::push_binds(payload, &mut values);
            values.push("now()");
            values.push("now()");
        }
        query.push(") RETURNING ").push(select_columns::<R>());
        query
    }

    fn select_query(owner_id: Uuid, id: Option<Uuid>) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {} FROM {} WHERE user_id = ",
            select_columns::<R>(),
            R::TABLE
        ));
        query.push_bind(owner_id);
        if let Some(id) = id {
            query.push(" AND id = ").push_bind(id);
        }
        query.push(" AND deleted_at IS NULL ORDER BY created_at, id");
        query
    }

    fn update_query(owner_id: Uuid, id: Uuid, payload: &R::Payload) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(format!(
            "UPDATE {} SET ({}, updated_at) = (",
            R::TABLE,
            R::COLUMNS.join(", ")
        ));
        {
            let mut values = query.separated(", ");
            R::push_binds(payload, &mut values);
            values.push("now()");
        }
        query.push(") WHERE id = ").push_bind(id);
        query.push(" AND user_id = ").push_bind(owner_id);
        query.push(" AND deleted_at IS NULL RETURNING ").push(select_columns::<R>());
        query
    }

    fn delete_query(owner_id: Uuid, id: Uuid) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(format!(
            "UPDATE {} SET deleted_at = COALESCE(deleted_at, now()) WHERE id = ",
            R::TABLE
        ));
        query.push_bind(id);
        query.push(" AND user_id = ").push_bind(owner_id);
        query
    }
}
