use serde::{Deserialize, Serialize};

/// A single text-to-text dialogue example.
///
/// `src`, `tgt`, `dialog_id` and `turn` are required constructor arguments.
/// `frame` defaults to 0 and is never written to the record container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextToTextExample {
    /// Input text for the model.
    pub src: String,
    /// Target text for the model.
    pub tgt: String,
    /// Id of the dialogue this example was generated from.
    pub dialog_id: String,
    /// Turn of the dialogue this example was generated from.
    pub turn: u32,
    /// Frame of the dialogue this example was generated from.
    #[serde(default)]
    pub frame: u32,
}

impl TextToTextExample {
    pub fn new(
        src: impl Into<String>,
        tgt: impl Into<String>,
        dialog_id: impl Into<String>,
        turn: u32,
    ) -> Self {
        Self {
            src: src.into(),
            tgt: tgt.into(),
            dialog_id: dialog_id.into(),
            turn,
            frame: 0,
        }
    }

    pub fn with_frame(mut self, frame: u32) -> Self {
        self.frame = frame;
        self
    }
}
