// src/application/ports/util.rs

/// Turns free text into a slug candidate.
///
/// Implementations must return a string satisfying the slug invariant, even
/// for input with no usable characters.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
