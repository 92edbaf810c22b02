use crate::dimension::DimensionVector;
use serde::{Deserialize, Serialize};

/// One questionnaire question with its selectable options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    /// Unique question id (referenced by answer sets)
    pub id: String,

    /// Prompt text shown to the user
    pub prompt: String,

    /// Category tag for grouping in the questionnaire UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Whether more than one option may be selected
    #[serde(default)]
    pub multi_select: bool,

    /// Upper bound on selections for multi-select questions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<u8>,

    /// Selectable options, in display order
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Look up an option by its value token
    #[must_use]
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Maximum number of values a valid answer may select
    #[must_use]
    pub fn selection_limit(&self) -> usize {
        if self.multi_select {
            self.max_selections
                .map(usize::from)
                .unwrap_or(self.options.len())
        } else {
            1
        }
    }
}

/// One selectable answer with its per-dimension score deltas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionOption {
    /// Stable value token (what answer sets reference)
    pub value: String,

    /// Display text
    pub label: String,

    /// Sparse per-dimension deltas, conceptually in [-10, 10]. Dimensions the
    /// option does not mention contribute nothing.
    #[serde(default)]
    pub scores: DimensionVector,
}
