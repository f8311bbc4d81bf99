use std::collections::BTreeMap;

use bytes::Bytes;
use prost::Message;

use crate::constants::{FEATURE_DIALOG_ID, FEATURE_INPUT, FEATURE_TURN, FEATURE_VALUE};
use crate::example::TextToTextExample;
use crate::features::proto::{feature::Kind, BytesList, Example, Feature, Features, FloatList, Int64List};

/// Single-value bytes feature.
pub fn bytes_feature(value: impl Into<Bytes>) -> Feature {
    Feature { kind: Some(Kind::BytesList(BytesList { value: vec![value.into()] })) }
}

/// Single-value int64 feature.
pub fn int64_feature(value: i64) -> Feature {
    Feature { kind: Some(Kind::Int64List(Int64List { value: vec![value] })) }
}

/// Single-value float feature.
pub fn float_feature(value: f32) -> Feature {
    Feature { kind: Some(Kind::FloatList(FloatList { value: vec![value] })) }
}

/// Build the protobuf message for one dialogue example.
///
/// `frame` has no wire field and is dropped; readers of existing files only
/// know the four keys below.
pub fn to_proto(example: &TextToTextExample) -> Example {
    let mut feature = BTreeMap::new();
    feature.insert(FEATURE_INPUT.to_owned(), bytes_feature(example.src.clone().into_bytes()));
    feature.insert(FEATURE_VALUE.to_owned(), bytes_feature(example.tgt.clone().into_bytes()));
    feature.insert(FEATURE_DIALOG_ID.to_owned(), bytes_feature(example.dialog_id.clone().into_bytes()));
    feature.insert(FEATURE_TURN.to_owned(), int64_feature(i64::from(example.turn)));

    Example { features: Some(Features { feature }) }
}

/// Serialize one dialogue example into a record payload.
pub fn encode_example(example: &TextToTextExample) -> Vec<u8> {
    to_proto(example).encode_to_vec()
}
