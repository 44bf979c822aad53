//! Slug generation for the field-recording catalogue.
//!
//! Titles of materials, tags and projects are transliterated into URL-safe
//! slugs, with a random friendly name when nothing usable remains, and made
//! unique per entity kind against the catalogue store.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
