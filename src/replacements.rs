//! Ordered, literal custom replacements applied before anything else.
use memchr::memmem;
use smallvec::SmallVec;
use std::borrow::Cow;

/// An ordered set of `(pattern, replacement)` pairs with unique patterns.
///
/// Patterns are plain substrings (no regex syntax), matched case-sensitively.
/// Pairs run in insertion order; each pass rewrites the output of the
/// previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    pairs: SmallVec<[(String, String); 4]>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair. An existing pattern keeps its position and gets the new
    /// replacement, which is returned as the previous one.
    pub fn insert(
        &mut self,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Option<String> {
        let pattern = pattern.into();
        let replacement = replacement.into();
        match self.pairs.iter_mut().find(|(p, _)| *p == pattern) {
            Some((_, existing)) => Some(std::mem::replace(existing, replacement)),
            None => {
                self.pairs.push((pattern, replacement));
                None
            }
        }
    }

    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(p, _)| p == pattern)
            .map(|(_, r)| r.as_str())
    }

    pub fn contains_key(&self, pattern: &str) -> bool {
        self.get(pattern).is_some()
    }

    pub fn remove(&mut self, pattern: &str) -> Option<String> {
        let idx = self.pairs.iter().position(|(p, _)| p == pattern)?;
        Some(self.pairs.remove(idx).1)
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(p, r)| (p.as_str(), r.as_str()))
    }

    /// `true` if at least one non-empty pattern occurs in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.pairs
            .iter()
            .any(|(p, _)| !p.is_empty() && memmem::find(text.as_bytes(), p.as_bytes()).is_some())
    }

    /// Run every pair over `text`, in order.
    ///
    /// Empty patterns are no-ops. Returns the input untouched when nothing
    /// matches.
    pub fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut text = text;
        for (pattern, replacement) in &self.pairs {
            if let Some(replaced) = replace_all(&text, pattern, replacement) {
                text = Cow::Owned(replaced);
            }
        }
        text
    }
}

/// Replace every non-overlapping occurrence of `pattern`, scanning left to
/// right. `None` when there is nothing to replace.
fn replace_all(text: &str, pattern: &str, replacement: &str) -> Option<String> {
    if pattern.is_empty() {
        return None;
    }
    let finder = memmem::Finder::new(pattern.as_bytes());
    let mut hits = finder.find_iter(text.as_bytes()).peekable();
    hits.peek()?;

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for start in hits {
        // Pattern and text are both valid UTF-8, so a match starts and ends
        // on char boundaries.
        out.push_str(&text[last..start]);
        out.push_str(replacement);
        last = start + pattern.len();
    }
    out.push_str(&text[last..]);
    Some(out)
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Replacements {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut replacements = Replacements::new();
        replacements.extend(iter);
        replacements
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Replacements {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (pattern, replacement) in iter {
            self.insert(pattern, replacement);
        }
    }
}
