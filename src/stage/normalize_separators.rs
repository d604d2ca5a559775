//! stage/normalize_separators.rs – collapses runs of the configured separator
//! and strips it from both ends.
//!
//! The *other* separator character is plain text here: with `-` configured,
//! `a---b___c` becomes `a-b___c`; with `_` configured it becomes `a---b_c`.
use crate::{context::Context, stage::Stage};
use memchr::memmem;
use std::borrow::Cow;

pub struct NormalizeSeparators;

#[inline(always)]
fn has_run(text: &str, sep: u8) -> bool {
    memmem::find(text.as_bytes(), &[sep, sep]).is_some()
}

fn collapse(text: &str, sep: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_sep = false;
    for c in text.chars() {
        let is_sep = c == sep;
        if !(is_sep && prev_sep) {
            out.push(c);
        }
        prev_sep = is_sep;
    }
    out
}

impl Stage for NormalizeSeparators {
    fn name(&self) -> &'static str {
        "normalize_separators"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        let sep = ctx.separator().as_byte();
        let b = text.as_bytes();
        b.first() == Some(&sep) || b.last() == Some(&sep) || has_run(text, sep)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let sep = ctx.sep_char();
        let byte = ctx.separator().as_byte();
        match text {
            Cow::Borrowed(s) => {
                let trimmed = s.trim_matches(sep);
                if has_run(trimmed, byte) {
                    Cow::Owned(collapse(trimmed, sep))
                } else {
                    Cow::Borrowed(trimmed)
                }
            }
            Cow::Owned(s) => {
                let trimmed = s.trim_matches(sep);
                if has_run(trimmed, byte) {
                    Cow::Owned(collapse(trimmed, sep))
                } else if trimmed.len() == s.len() {
                    Cow::Owned(s)
                } else {
                    Cow::Owned(trimmed.to_owned())
                }
            }
        }
    }
}
