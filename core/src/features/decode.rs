use bytes::Bytes;
use prost::Message;

use crate::constants::{FEATURE_DIALOG_ID, FEATURE_INPUT, FEATURE_TURN, FEATURE_VALUE};
use crate::features::proto::{feature::Kind, Example, Feature};
use crate::features::schema::{DType, DefaultValue, FeatureSpec, Schema, DIALOGUE_SCHEMA};
use crate::features::types::{FeatureValue, ParsedExample, SchemaError};

/// Parse one serialized `Example` against a static schema.
///
/// - Var-length features that are absent decode to an empty list.
/// - Fixed-length features must hold exactly one value; absent ones fall back
///   to their default or fail with `MissingRequired`.
/// - Features the schema does not declare are ignored.
/// - No partial result is returned on error.
pub fn parse_single_example(record: &[u8], schema: &Schema) -> Result<ParsedExample, SchemaError> {
    let example = Example::decode(record)?;
    let features = example.features.unwrap_or_default();

    let mut parsed = ParsedExample::new();
    for (name, spec) in schema {
        let kind = features.feature.get(*name).and_then(|f: &Feature| f.kind.as_ref());
        let value = match spec {
            FeatureSpec::VarLen(dtype) => parse_var_len(name, *dtype, kind)?,
            FeatureSpec::FixedLen { dtype, default } => parse_fixed_len(name, *dtype, default.as_ref(), kind)?,
        };
        parsed.insert((*name).to_owned(), value);
    }
    Ok(parsed)
}

/// Parse one dialogue record: `input`, `value`, `dialog_id` as var-length
/// strings and `turn` as a required scalar int64.
pub fn decode_fn(record: &[u8]) -> Result<ParsedExample, SchemaError> {
    parse_single_example(record, DIALOGUE_SCHEMA)
}

fn parse_var_len(name: &str, dtype: DType, kind: Option<&Kind>) -> Result<FeatureValue, SchemaError> {
    let Some(kind) = kind else {
        return Ok(match dtype {
            DType::String => FeatureValue::Strings(Vec::new()),
            DType::Int64 => FeatureValue::Int64s(Vec::new()),
            DType::Float32 => FeatureValue::Floats(Vec::new()),
        });
    };
    match (dtype, kind) {
        (DType::String, Kind::BytesList(l)) => Ok(FeatureValue::Strings(l.value.clone())),
        (DType::Int64, Kind::Int64List(l)) => Ok(FeatureValue::Int64s(l.value.clone())),
        (DType::Float32, Kind::FloatList(l)) => Ok(FeatureValue::Floats(l.value.clone())),
        (expected, found) => Err(kind_mismatch(name, expected, found)),
    }
}

fn parse_fixed_len(
    name: &str,
    dtype: DType,
    default: Option<&DefaultValue>,
    kind: Option<&Kind>,
) -> Result<FeatureValue, SchemaError> {
    let Some(kind) = kind else {
        return match default {
            Some(DefaultValue::String(b)) => Ok(FeatureValue::String(Bytes::from_static(*b))),
            Some(DefaultValue::Int64(v)) => Ok(FeatureValue::Int64(*v)),
            Some(DefaultValue::Float32(v)) => Ok(FeatureValue::Float(*v)),
            None => Err(SchemaError::MissingRequired { name: name.to_owned() }),
        };
    };
    match (dtype, kind) {
        (DType::String, Kind::BytesList(l)) => single(name, &l.value).map(|v| FeatureValue::String(v.clone())),
        (DType::Int64, Kind::Int64List(l)) => single(name, &l.value).map(|v| FeatureValue::Int64(*v)),
        (DType::Float32, Kind::FloatList(l)) => single(name, &l.value).map(|v| FeatureValue::Float(*v)),
        (expected, found) => Err(kind_mismatch(name, expected, found)),
    }
}

fn single<'a, T>(name: &str, values: &'a [T]) -> Result<&'a T, SchemaError> {
    match values {
        [v] => Ok(v),
        _ => Err(SchemaError::ShapeMismatch { name: name.to_owned(), expected: 1, found: values.len() }),
    }
}

fn kind_mismatch(name: &str, expected: DType, found: &Kind) -> SchemaError {
    SchemaError::KindMismatch { name: name.to_owned(), expected, found: found.name() }
}

/// Typed view over a parsed dialogue record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDialogue {
    pub input: String,
    pub value: String,
    pub dialog_id: String,
    pub turn: i64,
}

impl TryFrom<ParsedExample> for DecodedDialogue {
    type Error = SchemaError;

    fn try_from(parsed: ParsedExample) -> Result<Self, Self::Error> {
        Ok(Self {
            input: first_string(&parsed, FEATURE_INPUT)?,
            value: first_string(&parsed, FEATURE_VALUE)?,
            dialog_id: first_string(&parsed, FEATURE_DIALOG_ID)?,
            turn: parsed
                .get(FEATURE_TURN)
                .and_then(FeatureValue::as_int64)
                .ok_or_else(|| SchemaError::MissingRequired { name: FEATURE_TURN.to_owned() })?,
        })
    }
}

/// Decode a dialogue record straight into its typed view.
pub fn decode_dialogue(record: &[u8]) -> Result<DecodedDialogue, SchemaError> {
    DecodedDialogue::try_from(decode_fn(record)?)
}

/// The writer always emits exactly one value per text feature.
fn first_string(parsed: &ParsedExample, name: &str) -> Result<String, SchemaError> {
    let values = parsed
        .get(name)
        .and_then(FeatureValue::as_strings)
        .ok_or_else(|| SchemaError::MissingRequired { name: name.to_owned() })?;
    let bytes = single(name, values)?;
    String::from_utf8(bytes.to_vec()).map_err(|_| SchemaError::InvalidUtf8 { name: name.to_owned() })
}
