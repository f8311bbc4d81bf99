use std::collections::BTreeMap;

use bytes::Bytes;
use thiserror::Error;

use crate::features::schema::DType;

/// A decoded feature value, typed by the schema entry it was parsed with.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    /// Var-length string feature.
    Strings(Vec<Bytes>),
    /// Var-length int64 feature.
    Int64s(Vec<i64>),
    /// Var-length float feature.
    Floats(Vec<f32>),
    /// Fixed-length scalar string feature.
    String(Bytes),
    /// Fixed-length scalar int64 feature.
    Int64(i64),
    /// Fixed-length scalar float feature.
    Float(f32),
}

impl FeatureValue {
    pub fn as_strings(&self) -> Option<&[Bytes]> {
        match self {
            FeatureValue::Strings(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_int64(&self) -> Option<i64> {
        match self {
            FeatureValue::Int64(v) => Some(*v),
            _ => None,
        }
    }
}

/// Feature name → decoded value, for every feature the schema declares.
pub type ParsedExample = BTreeMap<String, FeatureValue>;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// Not a valid protobuf `Example` (truncated bytes, bad wire type, ...).
    #[error("malformed record: {0}")]
    Malformed(#[from] prost::DecodeError),

    #[error("feature `{name}` expected {expected}, found {found}")]
    KindMismatch { name: String, expected: DType, found: &'static str },

    #[error("required feature `{name}` is missing")]
    MissingRequired { name: String },

    #[error("feature `{name}` expected {expected} value(s), found {found}")]
    ShapeMismatch { name: String, expected: usize, found: usize },

    #[error("feature `{name}` is not valid UTF-8")]
    InvalidUtf8 { name: String },
}
