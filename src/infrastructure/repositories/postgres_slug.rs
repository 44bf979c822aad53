// src/infrastructure/repositories/postgres_slug.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{EntityKind, RecordId, Slug, SlugLookup};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresSlugLookup {
    pool: PgPool,
}

impl PostgresSlugLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlugLookup for PostgresSlugLookup {
    async fn exists(
        &self,
        kind: EntityKind,
        slug: &Slug,
        exclude_id: Option<RecordId>,
    ) -> DomainResult<bool> {
        // Table names come from the closed `EntityKind` set, never from input.
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT EXISTS(SELECT 1 FROM ");
        builder.push(kind.table());
        builder.push(" WHERE slug = ");
        builder.push_bind(slug.as_str().to_owned());

        if let Some(id) = exclude_id {
            builder.push(" AND id <> ");
            builder.push_bind(i64::from(id));
        }

        builder.push(")");

        builder
            .build_query_scalar::<bool>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
