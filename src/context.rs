// src/context.rs
// Everything a stage needs to know about the current call. Tiny, Copy, and
// only borrows from the owning `Slugify`.

use crate::{
    config::{Config, Separator},
    replacements::Replacements,
    transliterator::Transliterator,
};
use std::fmt;

/// Runtime context passed to every pipeline stage.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub config: Config,
    pub replacements: &'a Replacements,
    /// `Some` only when transliteration is enabled.
    pub transliterator: Option<&'a dyn Transliterator>,
}

impl<'a> Context<'a> {
    #[inline(always)]
    pub fn new(
        config: Config,
        replacements: &'a Replacements,
        transliterator: &'a dyn Transliterator,
    ) -> Self {
        let transliterator = config.use_transliterator.then_some(transliterator);
        Self {
            config,
            replacements,
            transliterator,
        }
    }

    #[inline(always)]
    pub fn separator(&self) -> Separator {
        self.config.separator
    }

    #[inline(always)]
    pub fn sep_char(&self) -> char {
        self.config.separator.as_char()
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("replacements", &self.replacements.len())
            .field("transliterator", &self.transliterator.map(|t| t.name()))
            .finish()
    }
}
