//! Whole-string transliteration for scripts the built-in map does not cover.
//!
//! The engine is an injected capability. With the `unidecode` feature (on by
//! default) [`Unidecode`] is used; without it [`Passthrough`] leaves the text
//! alone and only the built-in character map applies.
use std::borrow::Cow;

/// Converts text in any script to Latin, ideally plain ASCII.
///
/// Output does not have to be clean: it still goes through the character
/// filter, so leftover non-ASCII is mapped or dropped and spaces or
/// punctuation become word boundaries.
pub trait Transliterator: Send + Sync {
    fn name(&self) -> &'static str;

    fn transliterate<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Leaves text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Transliterator for Passthrough {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    #[inline(always)]
    fn transliterate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Transliteration backed by the `unidecode` tables.
///
/// Ideographs come out as space-separated syllables (`健康` → `"Jian Kang "`),
/// which the filter turns into separate words.
#[cfg(feature = "unidecode")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Unidecode;

#[cfg(feature = "unidecode")]
impl Transliterator for Unidecode {
    fn name(&self) -> &'static str {
        "unidecode"
    }

    fn transliterate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.is_ascii() {
            return Cow::Borrowed(text);
        }
        Cow::Owned(unidecode::unidecode(text))
    }
}

#[cfg(feature = "unidecode")]
pub type DefaultTransliterator = Unidecode;

#[cfg(not(feature = "unidecode"))]
pub type DefaultTransliterator = Passthrough;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_borrows() {
        let input = "健康管理";
        let out = Passthrough.transliterate(input);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[cfg(feature = "unidecode")]
    #[test]
    fn unidecode_han() {
        let out = Unidecode.transliterate("健康管理");
        assert!(out.is_ascii());
        assert_eq!(out.to_lowercase().split_whitespace().collect::<Vec<_>>(), [
            "jian", "kang", "guan", "li"
        ]);
    }

    #[cfg(feature = "unidecode")]
    #[test]
    fn unidecode_ascii_is_zero_copy() {
        let out = Unidecode.transliterate("already ascii");
        assert!(matches!(out, Cow::Borrowed("already ascii")));
    }
}
