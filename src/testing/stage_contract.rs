use crate::{
    config::{Config, Separator},
    context::{Context, test_support},
    stage::Stage,
};
use std::borrow::Cow;

const SEPARATORS: [Separator; 2] = [Separator::Hyphen, Separator::Underscore];

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples(_sep: Separator) -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "a---b___c", "TEST", ""]
    }

    /// Samples that must pass through unchanged and without allocation.
    fn should_pass_through(_sep: Separator) -> &'static [&'static str] {
        &["hello", "world", "test123", ""]
    }

    /// Input/output pairs that pin down the stage's behaviour.
    fn should_transform(_sep: Separator) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal stage contract:
///
/// 1. `zero_copy_when_no_changes`: pass-through samples are never copied
/// 2. `transforms_as_expected`: `should_transform` pairs hold
/// 3. `stage_is_idempotent`: applying twice yields the same result as once
/// 4. `needs_apply_is_accurate`: predicts exactly whether `apply()` changes text
/// 5. `handles_empty_string`: `""` stays `""`
/// 6. `no_panic_on_mixed_scripts`: survives real-world mixed input
///
/// Each contract runs once per separator.
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::transforms_as_expected(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&$stage);
        $crate::testing::stage_contract::handles_empty_string(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

fn ctx_for(sep: Separator) -> Context<'static> {
    test_support::ctx(Config {
        separator: sep,
        ..Config::default()
    })
}

fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    if stage.needs_apply(&text, ctx) {
        stage.apply(text, ctx)
    } else {
        text
    }
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    for sep in SEPARATORS {
        let ctx = ctx_for(sep);
        for &input in S::should_pass_through(sep) {
            assert!(
                !stage.needs_apply(input, &ctx),
                "stage `{}` wants to touch pass-through sample `{input}` ({sep})",
                stage.name()
            );
            let out = stage.apply(Cow::Borrowed(input), &ctx);
            assert_eq!(out.as_ref(), input);
            assert!(
                matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
                "zero-copy violated by stage `{}` on `{input}` ({sep})",
                stage.name()
            );
        }
    }
}

pub fn transforms_as_expected<S: StageTestConfig>(stage: &S) {
    for sep in SEPARATORS {
        let ctx = ctx_for(sep);
        for &(input, expected) in S::should_transform(sep) {
            let out = run(stage, Cow::Borrowed(input), &ctx);
            assert_eq!(
                out.as_ref(),
                expected,
                "stage `{}` on `{input}` ({sep})",
                stage.name()
            );
        }
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    for sep in SEPARATORS {
        let ctx = ctx_for(sep);
        for &input in S::samples(sep) {
            let once = stage.apply(Cow::Borrowed(input), &ctx);
            let twice = stage.apply(once.clone(), &ctx);
            assert_eq!(
                once,
                twice,
                "apply() of `{}` not idempotent on `{input}` ({sep})",
                stage.name()
            );
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    for sep in SEPARATORS {
        let ctx = ctx_for(sep);
        let inputs = S::samples(sep)
            .iter()
            .chain(S::should_pass_through(sep))
            .copied()
            .chain(S::should_transform(sep).iter().map(|&(input, _)| input));
        for input in inputs {
            let predicted = stage.needs_apply(input, &ctx);
            let output = stage.apply(Cow::Owned(input.to_owned()), &ctx);
            let actually_changes = output != input;
            assert_eq!(
                predicted,
                actually_changes,
                "needs_apply() mismatch for stage `{}` on `{input}` ({sep})\n\
                 predicted: {predicted}\n\
                 actual   : {actually_changes} (output = {output:?})",
                stage.name()
            );
        }
    }
}

pub fn handles_empty_string<S: StageTestConfig>(stage: &S) {
    for sep in SEPARATORS {
        let ctx = ctx_for(sep);
        assert_eq!(run(stage, Cow::Borrowed(""), &ctx).as_ref(), "");
        assert_eq!(stage.apply(Cow::Borrowed(""), &ctx).as_ref(), "");
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    for sep in SEPARATORS {
        let ctx = ctx_for(sep);
        let _ = stage.apply(
            Cow::Borrowed("Hello 世界 русский Türkçe العربية 简体中文 Ελληνικά 🦀\u{0301}"),
            &ctx,
        );
    }
}
