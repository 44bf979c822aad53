use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::{generate_base_slug, generate_friendly_name};
use slug::slugify;

/// Transliterating normalizer: symbols are dropped, whitespace separates
/// words and unusable input falls back to a friendly name.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        generate_base_slug(input)
    }
}

/// Backed by the `slug` crate, where every run of punctuation becomes a
/// separator (`"don't"` gives `"don-t"`).
#[derive(Default, Clone)]
pub struct AsciiSlugGenerator;

impl SlugGenerator for AsciiSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let slug = slugify(input);
        if slug.bytes().any(|b| b.is_ascii_alphanumeric()) {
            slug
        } else {
            generate_friendly_name()
        }
    }
}
