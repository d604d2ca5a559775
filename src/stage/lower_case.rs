use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Folds the slug to lowercase unless the context asks to keep case.
pub struct LowerCase;

#[inline(always)]
fn changes_on_lowercase(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() != Some(c) || lower.next().is_some()
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        if !ctx.config.lower_case {
            return false;
        }
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        text.chars().any(changes_on_lowercase)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_lowercase();
            return Cow::Owned(owned);
        }
        Cow::Owned(text.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_stage_contract,
        config::{Config, Separator},
        context::test_support::ctx,
        testing::stage_contract::StageTestConfig,
    };

    impl StageTestConfig for LowerCase {
        fn should_pass_through(_: Separator) -> &'static [&'static str] {
            &["hello", "hello-world", "a_1", "ß", ""]
        }

        fn should_transform(_: Separator) -> &'static [(&'static str, &'static str)] {
            &[("Hello-World", "hello-world"), ("ABC_123", "abc_123"), ("ÄÖÜ", "äöü")]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(LowerCase);
    }

    #[test]
    fn preserves_case_when_disabled() {
        let ctx = ctx(Config {
            lower_case: false,
            ..Config::default()
        });
        assert!(!LowerCase.needs_apply("Hello-World", &ctx));
        let out = LowerCase.apply(Cow::Borrowed("Hello-World"), &ctx);
        assert!(matches!(out, Cow::Borrowed("Hello-World")));
    }
}
