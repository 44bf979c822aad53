use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{EntityKind, RecordId, Slug, SlugLookup};

type SlugIndex = HashMap<EntityKind, HashMap<String, RecordId>>;

/// Process-local slug index with the same uniqueness rule as the database
/// tables: one owner per slug within each kind.
#[derive(Default)]
pub struct InMemorySlugLookup {
    inner: RwLock<SlugIndex>,
}

impl InMemorySlugLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `slug` as owned by `id`. Fails with a conflict when another
    /// record of the same kind already holds it.
    pub fn insert(&self, kind: EntityKind, id: RecordId, slug: &Slug) -> DomainResult<()> {
        let mut index = self.inner.write().map_err(poisoned)?;
        let slugs = index.entry(kind).or_default();
        if slugs.get(slug.as_str()).is_some_and(|owner| *owner != id) {
            return Err(DomainError::Conflict(format!(
                "{kind} slug already exists: {slug}"
            )));
        }

        slugs.retain(|_, owner| *owner != id);
        slugs.insert(slug.as_str().to_owned(), id);
        drop(index);
        Ok(())
    }

    pub fn len(&self, kind: EntityKind) -> DomainResult<usize> {
        Ok(self
            .inner
            .read()
            .map_err(poisoned)?
            .get(&kind)
            .map_or(0, HashMap::len))
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> DomainError {
    DomainError::Persistence("slug index lock poisoned".into())
}

#[async_trait]
impl SlugLookup for InMemorySlugLookup {
    async fn exists(
        &self,
        kind: EntityKind,
        slug: &Slug,
        exclude_id: Option<RecordId>,
    ) -> DomainResult<bool> {
        Ok(self
            .inner
            .read()
            .map_err(poisoned)?
            .get(&kind)
            .and_then(|slugs| slugs.get(slug.as_str()))
            .is_some_and(|owner| Some(*owner) != exclude_id))
    }
}
