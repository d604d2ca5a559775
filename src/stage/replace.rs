//! stage/replace.rs – user-defined literal substitutions, run first so the
//! replacement text still goes through transliteration and filtering.
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Applies the context's [`Replacements`](crate::Replacements) in order.
pub struct ApplyReplacements;

impl Stage for ApplyReplacements {
    fn name(&self) -> &'static str {
        "replace"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        !ctx.replacements.is_empty() && ctx.replacements.matches(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        ctx.replacements.apply(text)
    }
}
