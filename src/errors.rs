use thiserror::Error;

/// A failed `expect!`, carrying everything printed on the `[Failed]` line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("assertion failed: {description} ({expression}) [{file}:{line}]")]
pub struct AssertionFailed {
    pub description: String,
    pub expression: String,
    pub file: String,
    pub line: u32,
}

#[cfg(test)]
mod tests {
    use super::AssertionFailed;

    #[test]
    fn test_display_includes_location() {
        let failure = AssertionFailed {
            description: "x==2".into(),
            expression: "x == 2".into(),
            file: "tests/suite.rs".into(),
            line: 12,
        };
        assert_eq!(
            failure.to_string(),
            "assertion failed: x==2 (x == 2) [tests/suite.rs:12]"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure = AssertionFailed {
            description: "d".into(),
            expression: "e".into(),
            file: "f.rs".into(),
            line: 1,
        };
        let error: anyhow::Error = failure.clone().into();
        assert_eq!(error.downcast_ref::<AssertionFailed>(), Some(&failure));
    }
}
