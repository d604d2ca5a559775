//! URL-safe slugs from arbitrary text.
//!
//! ```
//! assert_eq!(slugy::slugify("Zażółć gęślą jaźń."), "zazolc-gesla-jazn");
//! assert_eq!(slugy::slugify("Смысловые галлюцинации"), "smyslovye-gallyutsinatsii");
//! ```
//!
//! Use [`Slugify`] for custom replacements, `_` separators, case preservation
//! or full transliteration of scripts outside the built-in map.
pub mod charmap;
pub mod config;
pub mod context;
pub mod pipeline;
pub mod replacements;
pub mod slugify;
pub mod stage;
pub mod transliterator;


pub use config::{Config, Separator, SeparatorError};
pub use replacements::Replacements;
pub use slugify::Slugify;
pub use transliterator::{Passthrough, Transliterator};
#[cfg(feature = "unidecode")]
pub use transliterator::Unidecode;

use context::Context;
use pipeline::SLUG_PIPELINE;
use std::borrow::Cow;

/// Slugify `text` with the default settings: lowercase, `-` separator,
/// built-in character map only.
pub fn slugify(text: &str) -> String {
    let replacements = Replacements::new();
    let ctx = Context::new(Config::default(), &replacements, &Passthrough);
    SLUG_PIPELINE.process(Cow::Borrowed(text), &ctx).into_owned()
}
