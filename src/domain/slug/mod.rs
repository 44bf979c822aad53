// src/domain/slug/mod.rs
pub mod friendly;
pub mod normalizer;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use friendly::{generate_friendly_name, generate_friendly_name_with};
pub use normalizer::{generate_base_slug, normalize, transliterate};
pub use repository::SlugLookup;
pub use services::{SlugService, generate_unique_slug};
pub use value_objects::{EntityKind, RecordId, Slug};
