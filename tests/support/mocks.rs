// tests/support/mocks.rs
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use fieldnote_slug::application::ports::util::SlugGenerator;
use fieldnote_slug::domain::errors::{DomainError, DomainResult};
use fieldnote_slug::domain::slug::{EntityKind, RecordId, Slug, SlugLookup};

/// One recorded `exists` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCall {
    pub kind: EntityKind,
    pub slug: String,
    pub exclude_id: Option<RecordId>,
}

/// Answers "taken" for a fixed set of slugs and records every call.
pub struct RecordingLookup {
    taken: HashSet<String>,
    calls: Mutex<Vec<LookupCall>>,
}

impl RecordingLookup {
    pub fn new<I, S>(taken: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: taken.into_iter().map(Into::into).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    pub fn calls(&self) -> Vec<LookupCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugLookup for RecordingLookup {
    async fn exists(
        &self,
        kind: EntityKind,
        slug: &Slug,
        exclude_id: Option<RecordId>,
    ) -> DomainResult<bool> {
        self.calls.lock().unwrap().push(LookupCall {
            kind,
            slug: slug.to_string(),
            exclude_id,
        });
        Ok(self.taken.contains(slug.as_str()))
    }
}

/// Fails on the `fail_on`-th call (1-based) and reports "taken" before it.
pub struct FailingLookup {
    fail_on: usize,
    calls: Mutex<usize>,
}

impl FailingLookup {
    pub fn new(fail_on: usize) -> Self {
        Self {
            fail_on,
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl SlugLookup for FailingLookup {
    async fn exists(
        &self,
        _kind: EntityKind,
        _slug: &Slug,
        _exclude_id: Option<RecordId>,
    ) -> DomainResult<bool> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if *calls >= self.fail_on {
            Err(DomainError::Persistence("connection refused".into()))
        } else {
            Ok(true)
        }
    }
}

/// Generator returning a fixed slug regardless of input.
#[derive(Clone)]
pub struct FixedSlug(pub &'static str);

impl SlugGenerator for FixedSlug {
    fn slugify(&self, _input: &str) -> String {
        self.0.to_string()
    }
}
