//! JSON Pointer (RFC 6901) lookups over `serde_json::Value` documents.
//!
//! The NHL API nests most display fields several levels deep
//! (`homeTeam.commonName.default`), so the shaping code addresses them by
//! pointer rather than by intermediate structs. Three lookup flavours exist:
//!
//! - [`resolve`] fails with a typed [`PointerError`] when the path is missing,
//! - [`resolve_or`] falls back to a caller-supplied default,
//! - [`lookup`] plus the typed helpers return `Option`s for optional fields.
//!
//! `""` and `"/"` both address the whole document.

use serde_json::Value;
use thiserror::Error;

/// Reason a pointer could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointerError {
    #[error("could not find '{token}' in {pointer}")]
    MissingKey { token: String, pointer: String },

    #[error("could not convert '{token}' to an array index in {pointer}")]
    InvalidIndex { token: String, pointer: String },

    #[error("index {index} out of range in {pointer}")]
    IndexOutOfRange { index: usize, pointer: String },

    #[error("could not descend into '{token}', unsupported node type in {pointer}")]
    UnsupportedType { token: String, pointer: String },

    #[error("value at {pointer} is not a {expected}")]
    TypeMismatch {
        pointer: String,
        expected: &'static str,
    },
}

impl PointerError {
    /// The pointer that failed to resolve
    pub fn pointer(&self) -> &str {
        match self {
            PointerError::MissingKey { pointer, .. }
            | PointerError::InvalidIndex { pointer, .. }
            | PointerError::IndexOutOfRange { pointer, .. }
            | PointerError::UnsupportedType { pointer, .. }
            | PointerError::TypeMismatch { pointer, .. } => pointer,
        }
    }
}

fn unescape(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Resolves `pointer` against `data`, failing when any step is missing.
///
/// # Example
/// ```
/// use nhl_display_board::data_fetcher::json_pointer::resolve;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 5}});
/// assert_eq!(resolve(&doc, "/a/b").unwrap(), &json!(5));
/// assert!(resolve(&doc, "/a/c").is_err());
/// ```
pub fn resolve<'a>(data: &'a Value, pointer: &str) -> Result<&'a Value, PointerError> {
    if pointer.is_empty() || pointer == "/" {
        return Ok(data);
    }

    let mut current = data;
    for raw_token in pointer.split('/').skip(1) {
        let token = unescape(raw_token);
        current = match current {
            Value::Object(map) => map.get(&token).ok_or_else(|| PointerError::MissingKey {
                token: token.clone(),
                pointer: pointer.to_string(),
            })?,
            Value::Array(items) => {
                let index = token
                    .parse::<usize>()
                    .map_err(|_| PointerError::InvalidIndex {
                        token: token.clone(),
                        pointer: pointer.to_string(),
                    })?;
                items.get(index).ok_or_else(|| PointerError::IndexOutOfRange {
                    index,
                    pointer: pointer.to_string(),
                })?
            }
            _ => {
                return Err(PointerError::UnsupportedType {
                    token,
                    pointer: pointer.to_string(),
                });
            }
        };
    }
    Ok(current)
}

/// Resolves `pointer`, returning `default` when the path does not exist.
///
/// A path that exists and holds `null` resolves to that `null`.
pub fn resolve_or<'a>(data: &'a Value, pointer: &str, default: &'a Value) -> &'a Value {
    resolve(data, pointer).unwrap_or(default)
}

/// Resolves `pointer` to `Some(value)`, treating missing paths and `null` as `None`.
pub fn lookup<'a>(data: &'a Value, pointer: &str) -> Option<&'a Value> {
    resolve(data, pointer).ok().filter(|value| !value.is_null())
}

/// String at `pointer`, if present.
pub fn str_at<'a>(data: &'a Value, pointer: &str) -> Option<&'a str> {
    lookup(data, pointer).and_then(Value::as_str)
}

/// Integer at `pointer`, if present and numeric.
///
/// Whole floats and numeric strings are accepted; anything else is `None`.
pub fn i64_at(data: &Value, pointer: &str) -> Option<i64> {
    lookup(data, pointer).and_then(value_as_i64)
}

/// String at `pointer`, or an empty string.
pub fn string_or_blank(data: &Value, pointer: &str) -> String {
    str_at(data, pointer).unwrap_or_default().to_string()
}

/// Required string at `pointer`.
pub fn required_str<'a>(data: &'a Value, pointer: &str) -> Result<&'a str, PointerError> {
    resolve(data, pointer)?
        .as_str()
        .ok_or_else(|| PointerError::TypeMismatch {
            pointer: pointer.to_string(),
            expected: "string",
        })
}

/// Required integer at `pointer`.
pub fn required_i64(data: &Value, pointer: &str) -> Result<i64, PointerError> {
    value_as_i64(resolve(data, pointer)?).ok_or_else(|| PointerError::TypeMismatch {
        pointer: pointer.to_string(),
        expected: "number",
    })
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}
