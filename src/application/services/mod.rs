// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::ports::{SlugGeneratorPort, SlugLookupPort},
    domain::{
        errors::DomainResult,
        slug::{EntityKind, RecordId, Slug, SlugService},
    },
};

/// Services assembled once at startup and shared by reference with every
/// record-creation flow.
pub struct ApplicationServices {
    slugs: Arc<SlugService>,
}

impl ApplicationServices {
    pub fn new(lookup: Arc<SlugLookupPort>, slugger: Arc<SlugGeneratorPort>) -> Self {
        let slugs = Arc::new(SlugService::new(lookup, slugger));
        Self { slugs }
    }

    pub fn slugs(&self) -> Arc<SlugService> {
        Arc::clone(&self.slugs)
    }

    /// Resolve a slug for a record about to be created (`exclude_id == None`)
    /// or renamed. A raw id is validated before any lookup happens.
    pub async fn slug_for(
        &self,
        text: &str,
        kind: EntityKind,
        exclude_id: Option<i64>,
    ) -> DomainResult<Slug> {
        let exclude_id = exclude_id.map(RecordId::new).transpose()?;
        self.slugs.generate_unique_slug(text, kind, exclude_id).await
    }
}
