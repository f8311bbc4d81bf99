use std::fmt;

use crate::constants::{FEATURE_DIALOG_ID, FEATURE_INPUT, FEATURE_TURN, FEATURE_VALUE};

/// Element type of a declared feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    String,
    Int64,
    Float32,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::String => write!(f, "string"),
            DType::Int64 => write!(f, "int64"),
            DType::Float32 => write!(f, "float32"),
        }
    }
}

/// Default for a fixed-length feature that may be absent.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    String(&'static [u8]),
    Int64(i64),
    Float32(f32),
}

/// How one feature is expected to appear in a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureSpec {
    /// Any number of values (including none).
    VarLen(DType),
    /// Exactly one value (scalar shape). Required unless a default is given.
    FixedLen { dtype: DType, default: Option<DefaultValue> },
}

/// Static schema: ordered list of (feature name, spec).
pub type Schema = [(&'static str, FeatureSpec)];

/// Schema of a serialized dialogue record.
pub const DIALOGUE_SCHEMA: &Schema = &[
    (FEATURE_INPUT, FeatureSpec::VarLen(DType::String)),
    (FEATURE_VALUE, FeatureSpec::VarLen(DType::String)),
    (FEATURE_DIALOG_ID, FeatureSpec::VarLen(DType::String)),
    (FEATURE_TURN, FeatureSpec::FixedLen { dtype: DType::Int64, default: None }),
];
