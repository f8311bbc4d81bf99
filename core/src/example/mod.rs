//! example/mod.rs
//! In-memory text-to-text dialogue examples.
//!
//! Responsibilities:
//! - Hold one training pair plus its dialogue provenance
//!
//! Non-responsibilities:
//! - Generating examples from dialogues
//! - Serialization to the record container

pub mod types;

pub use types::TextToTextExample;
