//! Property-based tests for the add command

mod common;

use cli_sample::cli::App;
use cli_sample::runner::{add, Context, Verbosity};
use proptest::prelude::*;

fn add_args(a: impl ToString, b: impl ToString) -> Vec<String> {
    vec![
        "--a".to_string(),
        a.to_string(),
        "--b".to_string(),
        b.to_string(),
    ]
}

/// Any pair whose sum fits in i32 prints that sum
#[test]
fn test_add_in_range_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any::<i32>(), any::<i32>()), |(a, b)| {
            prop_assume!(a.checked_add(b).is_some());

            let result = add(&add_args(a, b)).unwrap();
            assert_eq!(result, (a + b).to_string());

            Ok(())
        })
        .unwrap();
}

/// Overflowing sums wrap around
#[test]
fn test_add_wrapping_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any::<i32>(), any::<i32>()), |(a, b)| {
            let result = add(&add_args(a, b)).unwrap();
            assert_eq!(result, a.wrapping_add(b).to_string());

            Ok(())
        })
        .unwrap();
}

/// Running the same arguments twice gives the same output and exit code
#[test]
fn test_run_is_idempotent_property() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let app = App::with_context(Context::new().with_verbosity(Verbosity::Silent));

    runner
        .run(
            &proptest::collection::vec("[-a-z0-9 ]{0,8}", 0..6),
            |tokens| {
                let mut first = Vec::new();
                let mut second = Vec::new();
                let code1 = app.run_with(&tokens, &mut first).unwrap();
                let code2 = app.run_with(&tokens, &mut second).unwrap();

                assert_eq!(code1, code2);
                assert_eq!(first, second);
                assert!(code1 == 0 || code1 == 1);

                Ok(())
            },
        )
        .unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// The built binary agrees with in-range addition, including negatives and zero
    #[test]
    fn test_binary_add_property(a in -100_000i32..=100_000, b in prop_oneof![Just(0i32), -100_000i32..=100_000]) {
        let (code, stdout, _) = common::run(&["add", "--a", &a.to_string(), "--b", &b.to_string()]);
        prop_assert_eq!(code, 0);
        prop_assert_eq!(stdout, format!("{}\n", a + b));
    }
}
