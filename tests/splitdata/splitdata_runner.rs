use super::splitdata_loader::{SplitFailure, SplitTestResult, TestCase, load_tests};
/// Split fixture runner
///
/// Checks every expected field of every fixture against `UrlSplit`.
use serde_json::Value;
use urlsplit::{Field, FieldValue, UrlSplit};

/// Compare a field value with its JSON expectation
fn field_matches(actual: &FieldValue, expected: &Value) -> bool {
    match (actual, expected) {
        (FieldValue::Text(text), Value::String(s)) => text == s,
        (FieldValue::List(list), Value::Array(items)) => {
            list.len() == items.len()
                && list
                    .iter()
                    .zip(items)
                    .all(|(piece, item)| item.as_str() == Some(piece.as_str()))
        }
        (FieldValue::Map(map), Value::Object(entries)) => {
            map.len() == entries.len()
                && entries
                    .iter()
                    .all(|(key, value)| map.get(key) == value.as_str())
        }
        _ => false,
    }
}

pub fn run_split_tests(tests: Vec<TestCase>) -> SplitTestResult {
    let mut result = SplitTestResult::default();

    for test in tests {
        let TestCase::SplitTest {
            input,
            query_values,
            expected,
        } = test
        else {
            continue;
        };

        let url = UrlSplit::new(&input);
        let mut failures = Vec::new();

        for (name, value) in &expected {
            let Ok(field) = name.parse::<Field>() else {
                failures.push(SplitFailure {
                    input: input.clone(),
                    field: name.clone(),
                    expected: value.to_string(),
                    actual: "unknown field".to_string(),
                });
                continue;
            };
            let actual = url.field(field);
            if !field_matches(&actual, value) {
                failures.push(SplitFailure {
                    input: input.clone(),
                    field: name.clone(),
                    expected: value.to_string(),
                    actual: format!("{actual:?}"),
                });
            }
        }

        for (key, value) in &query_values {
            let actual = url.query_value(key);
            if actual != value.as_str() {
                failures.push(SplitFailure {
                    input: input.clone(),
                    field: format!("queryValue({key})"),
                    expected: value.to_string(),
                    actual: format!("{actual:?}"),
                });
            }
        }

        if failures.is_empty() {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.extend(failures);
        }
    }

    result
}

#[test]
fn test_splitdata() {
    let result = run_split_tests(load_tests());
    println!("{}", result.summary());
    for failure in &result.failures {
        println!(
            "  {} [{}]: expected {}, got {}",
            failure.input, failure.field, failure.expected, failure.actual
        );
    }
    assert_eq!(result.failed, 0, "{}", result.summary());
    assert_eq!(result.passed, 12);
}
