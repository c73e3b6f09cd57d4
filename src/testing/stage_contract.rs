use crate::{
    context::{Context, Digits},
    stage::Stage,
};

/// Contexts every stage is exercised under.
pub const CONTEXTS: &[Context] = &[Context::new(Digits::Latin), Context::persian()];

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples(_ctx: &Context) -> &'static [&'static str] {
        &["Hello World 123", " سلام دنیا ", "TEST", ""]
    }

    /// Samples that must come back unchanged and still borrowed.
    fn should_pass_through(_ctx: &Context) -> &'static [&'static str] {
        &["hello", "world", "abc def", ""]
    }

    /// Input/output pairs with a known result.
    fn should_transform(_ctx: &Context) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal stage contracts:
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `char_mapper_equivalent_to_apply` → `bind` and `map` agree with `apply`
/// 3. `stage_is_idempotent` → applying twice yields same result as once
/// 4. `needs_apply_is_accurate` → predicts exactly whether `apply` changes text
/// 5. `no_panic_on_mixed_scripts` → survives mixed real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::char_mapper_equivalent_to_apply($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

use std::borrow::Cow;

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for ctx in CONTEXTS {
        for &input in S::samples(ctx) {
            let mut text = Cow::Borrowed(input);

            if stage.needs_apply(&text, ctx).unwrap() {
                let old_ptr = text.as_ref() as *const str;
                text = stage.apply(text, ctx).unwrap();
                assert_ne!(old_ptr, text.as_ref() as *const str);
            } else {
                assert_eq!(input as *const str, text.as_ref() as *const str);
            }

            // Second pass must never allocate again.
            let old_ptr = text.as_ref() as *const str;
            if stage.needs_apply(&text, ctx).unwrap() {
                text = stage.apply(text, ctx).unwrap();
            }
            assert_eq!(
                old_ptr,
                text.as_ref() as *const str,
                "zero-copy violated on second pass ({ctx:?}, input: `{input}`)"
            );
        }

        for &pass_through in S::should_pass_through(ctx) {
            let text = stage.apply(Cow::Borrowed(pass_through), ctx).unwrap();
            assert_eq!(text.as_ref(), pass_through);
            assert!(
                matches!(text, Cow::Borrowed(s) if s.as_ptr() == pass_through.as_ptr()),
                "zero-copy violated on pass-through sample ({ctx:?}, input: `{pass_through}`)"
            );
        }

        for &(input, expected) in S::should_transform(ctx) {
            let text = stage.apply(Cow::Borrowed(input), ctx).unwrap();
            assert_eq!(text.as_ref(), expected, "{ctx:?}, input: `{input}`");
        }
    }
}

pub fn char_mapper_equivalent_to_apply<S: StageTestConfig>(stage: S) {
    for ctx in CONTEXTS {
        let Some(mapper) = stage.as_char_mapper(ctx) else {
            continue;
        };
        for &input in S::samples(ctx) {
            let via_apply = stage.apply(Cow::Borrowed(input), ctx).unwrap();
            let via_bind: String = mapper.bind(input, ctx).collect();
            let via_map: String = input.chars().filter_map(|c| mapper.map(c, ctx)).collect();
            assert_eq!(via_apply.as_ref(), via_bind, "bind() ≠ apply() ({ctx:?}, `{input}`)");
            assert_eq!(via_apply.as_ref(), via_map, "map() ≠ apply() ({ctx:?}, `{input}`)");
        }
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for ctx in CONTEXTS {
        for &input in S::samples(ctx) {
            let once = stage.apply(Cow::Borrowed(input), ctx).unwrap();
            let twice = stage.apply(once.clone(), ctx).unwrap();
            assert_eq!(once, twice, "apply() not idempotent ({ctx:?}) on `{input}`");
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    for ctx in CONTEXTS {
        for &sample in S::samples(ctx) {
            check_accuracy(&stage, sample, ctx);
        }
        for &clean in S::should_pass_through(ctx) {
            check_accuracy(&stage, clean, ctx);
        }
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx).expect("needs_apply errored");
    let output = stage
        .apply(Cow::Owned(input.to_owned()), ctx)
        .expect("apply errored");
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` ({ctx:?}) on `{input}` (output = {output:?})",
        stage.name(),
    );
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    for ctx in CONTEXTS {
        let _ = stage.apply(
            Cow::Borrowed("Hello 世界 русский ﻻ إآؤ کتاب‌ها ۱۲۳ ٤٥٦ 789 \u{200D}\u{0640}"),
            ctx,
        );
    }
}
