use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::{EntityKind, RecordId, Slug};
use async_trait::async_trait;

/// Existence check against the store that owns records of every kind.
#[async_trait]
pub trait SlugLookup: Send + Sync {
    /// Whether a record of `kind` other than `exclude_id` already uses `slug`.
    async fn exists(
        &self,
        kind: EntityKind,
        slug: &Slug,
        exclude_id: Option<RecordId>,
    ) -> DomainResult<bool>;
}
