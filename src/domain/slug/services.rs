// src/domain/slug/services.rs
use std::sync::Arc;

use tracing::debug;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::slug::normalizer::generate_base_slug;
use crate::domain::slug::repository::SlugLookup;
use crate::domain::slug::value_objects::{EntityKind, RecordId, Slug};

/// Domain service responsible for producing slugs that are unique within an
/// entity kind.
///
/// The check is not reserved: two callers racing on the same title can both
/// receive the same slug. The store's unique constraint decides the winner.
pub struct SlugService {
    lookup: Arc<dyn SlugLookup>,
    generator: Arc<dyn SlugGenerator>,
}

impl SlugService {
    pub fn new(lookup: Arc<dyn SlugLookup>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { lookup, generator }
    }

    pub fn generate_base_slug(&self, text: &str) -> DomainResult<Slug> {
        Slug::new(self.generator.slugify(text))
    }

    pub async fn generate_unique_slug(
        &self,
        text: &str,
        kind: EntityKind,
        exclude_id: Option<RecordId>,
    ) -> DomainResult<Slug> {
        let base = self.generate_base_slug(text)?;
        resolve(self.lookup.as_ref(), &base, kind, exclude_id).await
    }
}

/// Resolves a unique slug for `text` with the default transliterating
/// normalizer.
pub async fn generate_unique_slug(
    lookup: &dyn SlugLookup,
    text: &str,
    kind: EntityKind,
    exclude_id: Option<RecordId>,
) -> DomainResult<Slug> {
    let base = Slug::new(generate_base_slug(text))?;
    resolve(lookup, &base, kind, exclude_id).await
}

async fn resolve(
    lookup: &dyn SlugLookup,
    base: &Slug,
    kind: EntityKind,
    exclude_id: Option<RecordId>,
) -> DomainResult<Slug> {
    let mut candidate = base.clone();
    let mut counter = 1u64;

    loop {
        if !lookup.exists(kind, &candidate, exclude_id).await? {
            debug!(%kind, slug = %candidate, attempts = counter, "resolved unique slug");
            return Ok(candidate);
        }

        debug!(%kind, slug = %candidate, "slug already taken");
        candidate = base.with_suffix(counter);
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct TakenSlugs {
        taken: HashSet<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SlugLookup for TakenSlugs {
        async fn exists(
            &self,
            _kind: EntityKind,
            slug: &Slug,
            _exclude_id: Option<RecordId>,
        ) -> DomainResult<bool> {
            self.calls.lock().unwrap().push(slug.to_string());
            Ok(self.taken.contains(slug.as_str()))
        }
    }

    struct Verbatim;

    impl SlugGenerator for Verbatim {
        fn slugify(&self, input: &str) -> String {
            input.to_string()
        }
    }

    #[tokio::test]
    async fn free_function_suffixes_after_collisions() {
        let lookup = TakenSlugs {
            taken: ["rain", "rain-1"].into_iter().collect(),
            calls: Mutex::new(vec![]),
        };

        let slug = generate_unique_slug(&lookup, "Rain", EntityKind::Tag, None)
            .await
            .unwrap();

        assert_eq!(slug.as_str(), "rain-2");
        assert_eq!(*lookup.calls.lock().unwrap(), vec!["rain", "rain-1", "rain-2"]);
    }

    #[tokio::test]
    async fn invalid_generator_output_is_rejected_before_lookup() {
        let lookup = Arc::new(TakenSlugs {
            taken: HashSet::new(),
            calls: Mutex::new(vec![]),
        });
        let service = SlugService::new(lookup.clone(), Arc::new(Verbatim));

        let err = service
            .generate_unique_slug("Not A Slug", EntityKind::Material, None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(lookup.calls.lock().unwrap().is_empty());
    }
}
