//! stage/separate_words.rs – marks word boundaries before any character is
//! dropped, so `"a ä"` cannot collapse into a single word later on.
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Turns each run of whitespace, and each `+`, into the configured separator.
pub struct SeparateWords;

#[inline(always)]
fn is_boundary(c: char) -> bool {
    c == '+' || c.is_whitespace()
}

impl Stage for SeparateWords {
    fn name(&self) -> &'static str {
        "separate_words"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b == b'+' || b.is_ascii_whitespace() || b == 0x0B);
        }
        text.chars().any(is_boundary)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }

        let sep = ctx.sep_char();
        let mut out = String::with_capacity(text.len());
        let mut in_ws = false;
        for c in text.chars() {
            if c.is_whitespace() {
                if !in_ws {
                    out.push(sep);
                    in_ws = true;
                }
                continue;
            }
            in_ws = false;
            out.push(if c == '+' { sep } else { c });
        }
        Cow::Owned(out)
    }
}
