use nom::combinator::all_consuming;
use nom::number::complete::recognize_float;
use nom::IResult;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const DEFAULT_COUNT: f64 = 1.0;

/// A count of calendar units, as loosely typed callers supply it.
///
/// Integers, floats and numeric text all count as numbers. Anything else is
/// treated as missing and is coerced to the default count of one; by contract
/// a bad count is never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UnitCount {
    Int(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl UnitCount {
    /// The numeric value of the count. Intentionally permissive: a count that
    /// is not numeric is silently replaced with the default of one, never
    /// rejected.
    pub(crate) fn valid_number(&self) -> f64 {
        self.numeric_value().unwrap_or(DEFAULT_COUNT)
    }

    fn numeric_value(&self) -> Option<f64> {
        match self {
            Self::Int(count) => Some(*count as f64),
            Self::Float(count) => Some(*count),
            Self::Text(text) => numeric_text(text),
            Self::Missing => None,
        }
    }
}

/// Accepts decimal and scientific-notation literals only, consumed in full;
/// `"12kg"`, hex text and `"NaN"` are not numbers here.
fn numeric_text(text: &str) -> Option<f64> {
    match numeric_literal(text.trim()) {
        Ok((_, literal)) => literal.parse::<f64>().ok(),
        Err(_) => None,
    }
}

fn numeric_literal(text: &str) -> IResult<&str, &str> {
    all_consuming(recognize_float)(text)
}

impl From<i32> for UnitCount {
    fn from(count: i32) -> Self {
        Self::Int(i64::from(count))
    }
}

impl From<i64> for UnitCount {
    fn from(count: i64) -> Self {
        Self::Int(count)
    }
}

impl From<u32> for UnitCount {
    fn from(count: u32) -> Self {
        Self::Int(i64::from(count))
    }
}

impl From<u64> for UnitCount {
    fn from(count: u64) -> Self {
        i64::try_from(count).map_or(Self::Float(count as f64), Self::Int)
    }
}

impl From<f32> for UnitCount {
    fn from(count: f32) -> Self {
        Self::Float(f64::from(count))
    }
}

impl From<f64> for UnitCount {
    fn from(count: f64) -> Self {
        Self::Float(count)
    }
}

impl From<&str> for UnitCount {
    fn from(count: &str) -> Self {
        Self::Text(count.to_string())
    }
}

impl From<String> for UnitCount {
    fn from(count: String) -> Self {
        Self::Text(count)
    }
}

impl<T: Into<UnitCount>> From<Option<T>> for UnitCount {
    fn from(count: Option<T>) -> Self {
        count.map_or(Self::Missing, Into::into)
    }
}

impl From<&Value> for UnitCount {
    fn from(count: &Value) -> Self {
        match count {
            Value::Number(number) => match (number.as_i64(), number.as_f64()) {
                (Some(int), _) => Self::Int(int),
                (None, Some(float)) => Self::Float(float),
                (None, None) => Self::Missing,
            },
            Value::String(text) => Self::Text(text.clone()),
            _ => Self::Missing,
        }
    }
}

impl From<Value> for UnitCount {
    fn from(count: Value) -> Self {
        Self::from(&count)
    }
}

impl<'de> Deserialize<'de> for UnitCount {
    /// Total over self-describing input: a boolean or an object becomes
    /// [`UnitCount::Missing`] instead of a deserialization error.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Value::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("2", Some(2.0))]
    #[case("-1.5", Some(-1.5))]
    #[case::padded(" 3 ", Some(3.0))]
    #[case::bare_fraction(".5", Some(0.5))]
    #[case::signed_fraction("+.5", Some(0.5))]
    #[case::trailing_dot("1.", Some(1.0))]
    #[case::exponent("1e3", Some(1000.0))]
    #[case::empty("", None)]
    #[case("abc", None)]
    #[case::hex("0x1A", None)]
    #[case::dangling_exponent("1e", None)]
    #[case("NaN", None)]
    #[case::trailing_garbage("12kg", None)]
    fn it_can_recognize_numeric_text(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(expected, numeric_text(text));
    }

    #[rstest]
    #[case(UnitCount::Int(3), 3.0)]
    #[case(UnitCount::Float(2.5), 2.5)]
    #[case(UnitCount::Text("4".to_string()), 4.0)]
    #[case(UnitCount::Text("four".to_string()), 1.0)]
    #[case(UnitCount::Missing, 1.0)]
    fn it_can_coerce_counts_to_valid_numbers(#[case] count: UnitCount, #[case] expected: f64) {
        assert_eq!(expected, count.valid_number());
    }

    #[rstest]
    #[case(json!(3), UnitCount::Int(3))]
    #[case(json!(2.5), UnitCount::Float(2.5))]
    #[case(json!("2"), UnitCount::Text("2".to_string()))]
    #[case::null(json!(null), UnitCount::Missing)]
    #[case::boolean(json!(true), UnitCount::Missing)]
    #[case::array(json!([1, 2]), UnitCount::Missing)]
    fn it_can_convert_json_values(#[case] value: Value, #[case] expected: UnitCount) {
        assert_eq!(expected, UnitCount::from(value));
    }

    #[test]
    fn it_can_convert_absent_counts() {
        assert_eq!(UnitCount::Missing, UnitCount::from(None::<i64>));
        assert_eq!(UnitCount::Int(2), UnitCount::from(Some(2)));
    }

    #[test]
    fn it_can_deserialize_any_self_describing_value() {
        let counts: Vec<UnitCount> =
            serde_json::from_str(r#"[2, 2.5, "7", null, {"a": 1}]"#).unwrap();

        assert_eq!(
            vec![
                UnitCount::Int(2),
                UnitCount::Float(2.5),
                UnitCount::Text("7".to_string()),
                UnitCount::Missing,
                UnitCount::Missing,
            ],
            counts
        );
    }

    #[test]
    fn it_can_serialize_counts_untagged() {
        let value = serde_json::to_value([
            UnitCount::Int(2),
            UnitCount::Float(2.5),
            UnitCount::Text("7".to_string()),
            UnitCount::Missing,
        ])
        .unwrap();

        assert_eq!(json!([2, 2.5, "7", null]), value);
    }
}
