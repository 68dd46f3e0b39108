use crate::error::PathError;
use indexmap::IndexMap;

/// Object members in order of first occurrence.
pub type Map = IndexMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i32),
    Long(i64),
    Float(f64),
}

impl Number {
    /// Lossy conversion for callers that do not care about the integer/float split.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(n) => f64::from(n),
            Number::Long(n) => n as f64,
            Number::Float(n) => n,
        }
    }
    pub fn is_integer(&self) -> bool {
        !matches!(self, Number::Float(_))
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Long(n) => write!(f, "{}", n),
            // `{:?}` keeps the fractional part of whole floats: 5.0, not 5
            Number::Float(n) => write!(f, "{:?}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(std::string::String),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(Number::Int(_)) => "integer",
            Value::Number(Number::Long(_)) => "long",
            Value::Number(Number::Float(_)) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Number(Number::Int(n)) => Some(*n),
            _ => None,
        }
    }
    /// Integers only; a float is never truncated.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(Number::Int(n)) => Some(i64::from(*n)),
            Value::Number(Number::Long(n)) => Some(*n),
            _ => None,
        }
    }
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(Number::Float(n)) => Some(*n),
            _ => None,
        }
    }
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
    pub fn index(&self, i: usize) -> Option<&Value> {
        self.as_array().and_then(|values| values.get(i))
    }
    /// Like [`Value::get`], but an explicit `null` counts as a missing field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }

    /// Walks a `/`-separated path of object keys and array indices.
    /// An empty path selects `self`.
    ///
    /// ```
    /// let v = jsonprobe::parse(r#"{"choices":[{"text":"hi"}]}"#).unwrap();
    /// assert_eq!(v.select("choices/0/text").unwrap().as_str(), Some("hi"));
    /// ```
    pub fn select(&self, path: &str) -> Result<&Value, PathError> {
        let mut cur = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            cur = match cur {
                Value::Object(map) => map
                    .get(segment)
                    .ok_or_else(|| PathError::MissingKey(segment.to_string()))?,
                Value::Array(values) => {
                    let index: usize = segment
                        .parse()
                        .map_err(|_| PathError::InvalidIndex(segment.to_string()))?;
                    values.get(index).ok_or(PathError::IndexOutOfBounds {
                        index,
                        len: values.len(),
                    })?
                }
                other => {
                    return Err(PathError::NotAContainer {
                        segment: segment.to_string(),
                        kind: other.kind(),
                    })
                }
            };
        }
        Ok(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_kind() {
        let test = |input: &str, kind: &str| {
            assert_eq!(parse(input).unwrap().kind(), kind);
        };
        test("null", "null");
        test("false", "boolean");
        test("7", "integer");
        test("4294967296", "long");
        test("7e0", "float");
        test(r#""x""#, "string");
        test("[]", "array");
        test("{}", "object");
    }

    #[test]
    fn test_accessors_do_not_coerce() {
        let v = parse("5").unwrap();
        assert_eq!(v.as_i32(), Some(5));
        assert_eq!(v.as_i64(), Some(5));
        assert_eq!(v.as_f64(), None);
        assert_eq!(v.as_str(), None);

        let v = parse("5.0").unwrap();
        assert_eq!(v.as_i32(), None);
        assert_eq!(v.as_i64(), None);
        assert_eq!(v.as_f64(), Some(5.0));
        assert_eq!(v.as_number().map(Number::to_f64), Some(5.0));

        let v = parse("2147483648").unwrap();
        assert_eq!(v.as_i32(), None);
        assert_eq!(v.as_i64(), Some(2_147_483_648));

        let v = parse(r#""true""#).unwrap();
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.as_str(), Some("true"));
    }

    #[test]
    fn test_field() {
        let v = parse(r#"{"organization": null, "rank": "expert"}"#).unwrap();
        assert_eq!(v.get("organization"), Some(&Value::Null));
        assert_eq!(v.field("organization"), None);
        assert_eq!(v.field("city"), None);
        assert_eq!(v.field("rank").and_then(Value::as_str), Some("expert"));
        // not an object
        assert_eq!(parse("[1]").unwrap().field("rank"), None);
        assert_eq!(parse("[1]").unwrap().index(0), Some(&Value::Number(Number::Int(1))));
        assert_eq!(parse("[1]").unwrap().index(1), None);
        assert_eq!(v.index(0), None);
    }

    #[test]
    fn test_select() {
        let v = parse(r#"{"result": [{"handle": "tourist", "rating": 3800}], "status": "OK"}"#)
            .unwrap();
        assert_eq!(v.select("").unwrap(), &v);
        assert_eq!(v.select("status").unwrap().as_str(), Some("OK"));
        assert_eq!(v.select("/result/0/rating").unwrap().as_i32(), Some(3800));
        assert_eq!(
            v.select("result/0/handle").map(Value::as_str),
            Ok(Some("tourist"))
        );
    }

    #[test]
    fn test_select_errors() {
        let v = parse(r#"{"result": [{"handle": "tourist"}], "status": "OK"}"#).unwrap();
        assert_eq!(
            v.select("comment"),
            Err(PathError::MissingKey("comment".to_string()))
        );
        assert_eq!(
            v.select("result/3"),
            Err(PathError::IndexOutOfBounds { index: 3, len: 1 })
        );
        assert_eq!(
            v.select("result/first"),
            Err(PathError::InvalidIndex("first".to_string()))
        );
        assert_eq!(
            v.select("status/length"),
            Err(PathError::NotAContainer {
                segment: "length".to_string(),
                kind: "string",
            })
        );
    }

    #[test]
    fn test_object_equality_ignores_order() {
        let a = parse(r#"{"a": 1, "b": [1, 2]}"#).unwrap();
        let b = parse(r#"{"b": [1, 2], "a": 1}"#).unwrap();
        assert_eq!(a, b);
        let c = parse(r#"{"b": [2, 1], "a": 1}"#).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Int(-3).to_string(), "-3");
        assert_eq!(Number::Long(4_294_967_296).to_string(), "4294967296");
        assert_eq!(Number::Float(5.0).to_string(), "5.0");
        assert_eq!(Number::Float(0.25).to_string(), "0.25");
        assert!(Number::Long(1).is_integer());
        assert!(!Number::Float(1.0).is_integer());
    }
}
