//! Random `adjective-noun-xxxx` names used when a title yields no usable
//! slug characters.

use rand::Rng;

pub const ADJECTIVES: &[&str] = &[
    "quiet", "distant", "gentle", "hollow", "bright", "misty", "windy", "calm", "early",
    "late", "humming", "silent", "amber", "velvet", "rustling", "deep", "lucid", "warm",
];

pub const NOUNS: &[&str] = &[
    "river", "forest", "harbor", "meadow", "station", "echo", "tide", "canyon", "rain",
    "garden", "market", "bell", "wind", "cicada", "valley", "creek", "shore", "temple",
];

pub const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
pub const ID_LENGTH: usize = 4;

pub fn generate_friendly_name() -> String {
    generate_friendly_name_with(&mut rand::thread_rng())
}

pub fn generate_friendly_name_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    let id: String = (0..ID_LENGTH)
        .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
        .collect();

    format!("{adjective}-{noun}-{id}")
}
