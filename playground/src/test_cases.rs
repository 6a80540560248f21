use assert_scope::{AssertionFailure, AssertionScope, Output};

/// Check that every number below ten is even, then that three is four: every assertion
/// runs and the case fails once at the end.
pub fn test_case_1(name: &str, output: impl Into<Output>) -> Result<(), AssertionFailure> {
    AssertionScope::new(name)
        .continue_on_failure(true)
        .output(output)
        .run(|tc| {
            for num in 0..10 {
                tc.assert_equal(num % 2, 0, format!("{num} not even"))?;
            }
            tc.assert_equal(3, 4, ())?;
            Ok(())
        })
}
