/// Split fixture loader
///
/// Each entry is either a comment string or an object with an `input` and
/// the expected value of any subset of fields, keyed by field name.
use serde::Deserialize;
use serde_json::{Map, Value};

pub const SPLITDATA: &str = include_str!("./splitdata.json");

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// Expected partials of one input
    SplitTest {
        input: String,
        #[serde(default, rename = "queryValues")]
        query_values: Map<String, Value>,
        #[serde(flatten)]
        expected: Map<String, Value>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct SplitFailure {
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct SplitTestResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<SplitFailure>,
}

impl SplitTestResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_tests() -> Vec<TestCase> {
    serde_json::from_str(SPLITDATA).expect("Failed to parse split test data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_tests() {
        let tests = load_tests();
        let cases = tests
            .iter()
            .filter(|test| matches!(test, TestCase::SplitTest { .. }))
            .count();
        assert_eq!(cases, 12);
        assert!(tests.iter().any(|test| matches!(test, TestCase::Comment(_))));
    }

    #[test]
    fn test_query_values_are_separated() {
        let tests = load_tests();
        let Some(TestCase::SplitTest {
            query_values,
            expected,
            ..
        }) = tests.iter().find(|test| matches!(test, TestCase::SplitTest { .. }))
        else {
            panic!("no split test in data");
        };
        assert!(query_values.contains_key("missing"));
        assert!(!expected.contains_key("queryValues"));
        assert!(!expected.contains_key("input"));
    }
}
