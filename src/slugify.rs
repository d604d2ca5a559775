use crate::{
    config::{Config, Separator},
    context::Context,
    pipeline::SLUG_PIPELINE,
    replacements::Replacements,
    transliterator::{DefaultTransliterator, Transliterator},
};
use std::{borrow::Cow, fmt, sync::Arc};

/// A configured slug generator.
///
/// Configuration methods consume and return `self`, so a `Slugify` is
/// finished before it is used and can be shared freely afterwards:
///
/// ```
/// use slugy::Slugify;
///
/// let slugify = Slugify::new()
///     .with_custom_replacement("leet", "1337")
///     .with_underscore_separator(true);
/// assert_eq!(slugify.slugify("Hello leet world!"), "hello_1337_world");
/// ```
#[derive(Clone)]
pub struct Slugify {
    config: Config,
    replacements: Replacements,
    transliterator: Arc<dyn Transliterator>,
}

impl Default for Slugify {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl fmt::Debug for Slugify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slugify")
            .field("config", &self.config)
            .field("replacements", &self.replacements)
            .field("transliterator", &self.transliterator.name())
            .finish()
    }
}

impl Slugify {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            replacements: Replacements::new(),
            transliterator: Arc::new(DefaultTransliterator::default()),
        }
    }

    /// Turn `text` into a slug.
    pub fn slugify(&self, text: &str) -> String {
        self.slugify_cow(text).into_owned()
    }

    /// Like [`slugify`](Self::slugify), treating `None` as empty input.
    pub fn slugify_opt(&self, text: Option<&str>) -> String {
        text.map(|t| self.slugify(t)).unwrap_or_default()
    }

    /// Turn `text` into a slug, borrowing from it when it needs no copy
    /// (already a slug, or one apart from surrounding whitespace and
    /// separators).
    pub fn slugify_cow<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let ctx = Context::new(self.config, &self.replacements, self.transliterator.as_ref());
        SLUG_PIPELINE.process(Cow::Borrowed(text), &ctx)
    }

    /// Add one custom replacement. Replacing an existing pattern keeps its
    /// original position.
    pub fn with_custom_replacement(
        mut self,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.replacements.insert(pattern, replacement);
        self
    }

    /// Replace the whole custom replacement set, discarding earlier entries.
    pub fn with_custom_replacements<I, K, V>(mut self, replacements: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let previous = self.replacements.len();
        self.replacements = replacements.into_iter().collect();
        log::debug!(
            "custom replacements replaced: {previous} -> {} entries",
            self.replacements.len()
        );
        self
    }

    pub fn custom_replacements(&self) -> &Replacements {
        &self.replacements
    }

    pub fn with_lower_case(mut self, lower_case: bool) -> Self {
        self.config.lower_case = lower_case;
        self
    }

    pub fn with_underscore_separator(mut self, underscore: bool) -> Self {
        self.config.separator = if underscore {
            Separator::Underscore
        } else {
            Separator::Hyphen
        };
        self
    }

    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.config.separator = separator;
        self
    }

    /// Enable the transliterator for scripts outside the built-in map.
    pub fn with_transliterator(mut self, enabled: bool) -> Self {
        self.config.use_transliterator = enabled;
        self
    }

    /// Install and enable a custom transliteration engine.
    pub fn with_custom_transliterator<T: Transliterator + 'static>(mut self, engine: T) -> Self {
        log::debug!("transliterator set to `{}`", engine.name());
        self.transliterator = Arc::new(engine);
        self.config.use_transliterator = true;
        self
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn transliterator_name(&self) -> &'static str {
        self.transliterator.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliterator::Passthrough;

    #[test]
    fn builder_methods_update_config() {
        let s = Slugify::new()
            .with_lower_case(false)
            .with_underscore_separator(true)
            .with_transliterator(true);
        assert_eq!(s.config(), Config {
            lower_case: false,
            separator: Separator::Underscore,
            use_transliterator: true,
        });
        let s = s.with_underscore_separator(false);
        assert_eq!(s.config().separator, Separator::Hyphen);
        let s = s.with_separator(Separator::Underscore);
        assert_eq!(s.config().separator, Separator::Underscore);
    }

    #[test]
    fn wholesale_replacements_discard_incremental_ones() {
        let s = Slugify::new()
            .with_custom_replacement("a", "b")
            .with_custom_replacements([("this", "that")]);
        assert_eq!(s.custom_replacements().len(), 1);
        assert_eq!(s.custom_replacements().get("this"), Some("that"));
        assert!(!s.custom_replacements().contains_key("a"));
    }

    #[test]
    fn custom_transliterator_enables_itself() {
        let s = Slugify::new().with_custom_transliterator(Passthrough);
        assert!(s.config().use_transliterator);
        assert_eq!(s.transliterator_name(), "passthrough");
    }

    #[test]
    fn slugify_cow_borrows_clean_input() {
        let s = Slugify::new();
        let input = "hello-world";
        assert!(matches!(s.slugify_cow(input), Cow::Borrowed(b) if b.as_ptr() == input.as_ptr()));
        assert!(matches!(s.slugify_cow("Hello World"), Cow::Owned(_)));
    }

    #[test]
    fn none_is_empty() {
        assert_eq!(Slugify::new().slugify_opt(None), "");
        assert_eq!(Slugify::new().slugify_opt(Some("A b")), "a-b");
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Slugify>();

        let s = Arc::new(Slugify::new().with_custom_replacement("&", "and"));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let s = Arc::clone(&s);
                std::thread::spawn(move || s.slugify(&format!("Tom & Jerry {i}")))
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), format!("tom-and-jerry-{i}"));
        }
    }
}
