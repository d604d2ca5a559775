//! Core slug pipeline stage abstraction.
//!
//! Every stage is a zero-sized, stateless struct. Whatever a stage needs to
//! know about the current call (separator, case handling, replacements, the
//! transliterator) comes from the [`Context`].
//!
//! Stages work on `Cow<str>`: a stage that has nothing to do hands the input
//! back untouched, so text that is already a valid slug passes through the
//! whole pipeline without a single allocation.
//!
//! Slugification is total, so stages cannot fail.

pub mod filter_chars;
pub mod lower_case;
pub mod normalize_separators;
pub mod replace;
pub mod separate_words;
pub mod transliterate;
pub mod trim_whitespace;

use crate::context::Context;
use std::borrow::Cow;

/// A single slugification step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in trace logs and test failures.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called without a preceding `needs_apply`.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

/// `true` for the characters a slug is made of: ASCII alphanumerics and
/// both separator characters.
#[inline(always)]
pub(crate) fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
