//! stage/filter_chars.rs
//!
//! Reduces text to slug characters in one pass:
//!
//! | input                                   | output                     |
//! |-----------------------------------------|----------------------------|
//! | `[A-Za-z0-9]`, `-`, `_`                 | kept as-is                 |
//! | in the built-in [`charmap`]             | its ASCII rendering        |
//! | any other ASCII (punctuation, spaces)   | the configured separator   |
//! | any other non-ASCII                     | dropped                    |
//!
//! Both separator characters are kept literally. Only the configured one is
//! later collapsed and trimmed, so `a___b` survives hyphen mode intact.
use crate::{
    charmap,
    context::Context,
    stage::{Stage, is_slug_char},
};
use std::borrow::Cow;

pub struct FilterChars;

impl Stage for FilterChars {
    fn name(&self) -> &'static str {
        "filter_chars"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> bool {
        if text.is_ascii() {
            return !text
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        }
        true
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !text.chars().any(|c| !is_slug_char(c)) {
            return text;
        }

        let sep = ctx.sep_char();
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if is_slug_char(c) {
                out.push(c);
            } else if let Some(mapped) = charmap::lookup(c) {
                out.push_str(mapped);
            } else if c.is_ascii() {
                out.push(sep);
            }
        }
        Cow::Owned(out)
    }
}
