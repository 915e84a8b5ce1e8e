//! Query string construction.
//!
//! Marvel accepts list filters as comma-separated values
//! (`comics=1,2,3`). [`QueryParams`] keeps keys in insertion order and
//! renders them without percent-encoding: values are expected to be
//! URL-safe already.
//!
//! # Example
//!
//! ```rust
//! use marvel_api::client::query::QueryParams;
//!
//! let mut params = QueryParams::new();
//! params.set("nameStartsWith", "spider");
//! params.set("comics", vec![1, 2, 3]);
//! params.set("orderBy", "name");
//!
//! assert_eq!(
//!     params.to_query_string(),
//!     "nameStartsWith=spider&comics=1,2,3&orderBy=name"
//! );
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// A single query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Rendered as-is
    Scalar(String),
    /// Rendered comma-joined
    List(Vec<String>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Scalar(s) => f.write_str(s),
            ParamValue::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Scalar(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

macro_rules! scalar_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    ParamValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, f32, f64);

impl<T: ToString> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for ParamValue {
    fn from(values: &[T]) -> Self {
        ParamValue::List(values.iter().map(ToString::to_string).collect())
    }
}

/// Insertion-ordered request parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter.
    ///
    /// An existing key keeps its position and takes the new value;
    /// a new key is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Builder form of [`set`](Self::set)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up a parameter
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no parameters are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as `key=value&key=a,b,c`
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Flatten a parameter struct into query parameters.
    ///
    /// Fields are taken in declaration order; `null` fields are skipped
    /// and arrays become comma-joined lists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the value is not an object or
    /// contains nested objects or nested arrays.
    pub fn from_serializable<T: Serialize + ?Sized>(params: &T) -> Result<Self, Error> {
        let value = serde_json::to_value(params)
            .map_err(|e| Error::InvalidParameter(format!("parameters failed to serialize: {}", e)))?;
        let map = match value {
            Value::Object(map) => map,
            Value::Null => return Ok(Self::new()),
            other => {
                return Err(Error::InvalidParameter(format!(
                    "parameters must serialize to an object, got {}",
                    other
                )))
            }
        };

        let mut query = Self::new();
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    let items = items
                        .into_iter()
                        .map(|item| scalar_to_string(&key, item))
                        .collect::<Result<Vec<_>, _>>()?;
                    query.set(key, ParamValue::List(items));
                }
                scalar => {
                    let rendered = scalar_to_string(&key, scalar)?;
                    query.set(key, ParamValue::Scalar(rendered));
                }
            }
        }
        Ok(query)
    }
}

fn scalar_to_string(key: &str, value: Value) -> Result<String, Error> {
    match value {
        Value::String(s) => Ok(s),
        // Whole floats render without a fraction (`1.0` -> `1`)
        Value::Number(n) => Ok(match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        }),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(Error::InvalidParameter(format!(
            "{} must be a scalar or a list of scalars",
            key
        ))),
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (k, v) in iter {
            query.set(k, v);
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_params_keep_insertion_order() {
        let params = QueryParams::new()
            .with("orderBy", "-modified")
            .with("limit", 20u32)
            .with("offset", 40u32);
        assert_eq!(params.to_query_string(), "orderBy=-modified&limit=20&offset=40");
    }

    #[test]
    fn test_list_params_comma_joined() {
        let params = QueryParams::new()
            .with("nameStartsWith", "spider")
            .with("comics", vec![1, 2, 3])
            .with("orderBy", "name");
        assert_eq!(
            params.to_query_string(),
            "nameStartsWith=spider&comics=1,2,3&orderBy=name"
        );
    }

    #[test]
    fn test_no_percent_encoding() {
        let params = QueryParams::new().with("modifiedSince", "2014-01-01T00:00:00+0000");
        assert_eq!(params.to_query_string(), "modifiedSince=2014-01-01T00:00:00+0000");
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut params = QueryParams::new().with("apikey", "user").with("limit", 5u32);
        params.set("apikey", "real");
        assert_eq!(params.to_query_string(), "apikey=real&limit=5");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_empty_params() {
        let params = QueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Filter {
        name_starts_with: Option<String>,
        comics: Option<Vec<u32>>,
        no_variants: Option<bool>,
        order_by: Option<String>,
    }

    #[test]
    fn test_from_serializable_field_order_and_skips_none() {
        let filter = Filter {
            name_starts_with: Some("spider".into()),
            comics: Some(vec![1, 2, 3]),
            no_variants: None,
            order_by: Some("name".into()),
        };
        let params = QueryParams::from_serializable(&filter).unwrap();
        assert_eq!(
            params.to_query_string(),
            "nameStartsWith=spider&comics=1,2,3&orderBy=name"
        );
    }

    #[test]
    fn test_from_serializable_bool() {
        let filter = Filter {
            name_starts_with: None,
            comics: None,
            no_variants: Some(true),
            order_by: None,
        };
        let params = QueryParams::from_serializable(&filter).unwrap();
        assert_eq!(params.to_query_string(), "noVariants=true");
    }

    #[test]
    fn test_from_serializable_whole_float_has_no_fraction() {
        let value = serde_json::json!({ "issueNumber": 1.0, "price": 2.5 });
        let params = QueryParams::from_serializable(&value).unwrap();
        assert_eq!(params.to_query_string(), "issueNumber=1&price=2.5");
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not representable"))
        }
    }

    #[test]
    fn test_serialize_failure_is_invalid_parameter() {
        assert!(matches!(
            QueryParams::from_serializable(&Unserializable),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_from_serializable_rejects_nested() {
        let nested = serde_json::json!({ "a": { "b": 1 } });
        assert!(matches!(
            QueryParams::from_serializable(&nested),
            Err(Error::InvalidParameter(_))
        ));

        let nested_list = serde_json::json!({ "a": [[1, 2]] });
        assert!(matches!(
            QueryParams::from_serializable(&nested_list),
            Err(Error::InvalidParameter(_))
        ));

        assert!(matches!(
            QueryParams::from_serializable(&42),
            Err(Error::InvalidParameter(_))
        ));
    }
}
