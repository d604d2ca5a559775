// src/pipeline.rs
use crate::{
    context::Context,
    stage::{
        Stage, filter_chars::FilterChars, lower_case::LowerCase,
        normalize_separators::NormalizeSeparators, replace::ApplyReplacements,
        separate_words::SeparateWords, transliterate::Transliterate,
        trim_whitespace::TrimWhitespace,
    },
};
use std::borrow::Cow;

/// The full slug pipeline, in order.
pub static SLUG_PIPELINE: Pipeline = Pipeline::new(&[
    &ApplyReplacements,
    &TrimWhitespace,
    &SeparateWords,
    &Transliterate,
    &FilterChars,
    &NormalizeSeparators,
    &LowerCase,
]);

pub struct Pipeline {
    stages: &'static [&'static dyn Stage],
}

impl Pipeline {
    pub const fn new(stages: &'static [&'static dyn Stage]) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|stage| stage.name())
    }

    pub fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let mut current = text;

        for stage in self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&current, ctx) {
                continue;
            }

            current = stage.apply(current, ctx);
            log::trace!(target: "slugy::pipeline", "{}: {:?}", stage.name(), current);
        }

        current
    }
}
