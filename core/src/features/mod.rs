//! features/mod.rs
//! Record payload: protobuf `Example` messages, schema declaration and parsing.
//!
//! Industry notes:
//! - The payload is a feature map keyed by stable string literals.
//! - Parsing is pure (no I/O) and safe to run concurrently over independent records.
//! - Declared schemas are static; unknown features are ignored rather than rejected.

pub mod proto;
pub mod schema;
pub mod types;
pub mod encode;
pub mod decode;

pub use schema::{DType, DefaultValue, FeatureSpec, Schema, DIALOGUE_SCHEMA};
pub use types::{FeatureValue, ParsedExample, SchemaError};
pub use encode::{bytes_feature, encode_example, float_feature, int64_feature, to_proto};
pub use decode::{decode_dialogue, decode_fn, parse_single_example, DecodedDialogue};
