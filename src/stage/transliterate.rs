//! stage/transliterate.rs – **whole-string script conversion (opt-in)**
//! * Only runs when the context carries a transliterator
//! * ASCII input is never handed to the engine
//! * Output is not trusted: `FilterChars` still runs afterwards
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Public stage – zero-sized, stateless.
pub struct Transliterate;

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        "transliterate"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.transliterator.is_some() && !text.is_ascii()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let Some(engine) = ctx.transliterator else {
            return text; // Zero-cost fast path
        };
        if text.is_ascii() {
            return text;
        }

        let converted = match engine.transliterate(&text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        match converted {
            Some(s) => Cow::Owned(s),
            None => text,
        }
    }
}
