use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Selected option values per question id.
///
/// The wire format accepts both an array of values and, for single-select
/// clients, a bare string: `{"q1": ["a", "b"], "q2": "c"}`. Serialization
/// always emits arrays.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AnswerSet {
    responses: BTreeMap<String, Vec<String>>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: record the selection for one question
    #[must_use]
    pub fn select<I, V>(mut self, question_id: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.insert(question_id, values);
        self
    }

    /// Record the selection for one question, replacing any previous one
    pub fn insert<I, V>(&mut self, question_id: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.responses.insert(
            question_id.into(),
            values.into_iter().map(Into::into).collect(),
        );
    }

    /// Selected values for a question, if it was answered
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&[String]> {
        self.responses.get(question_id).map(Vec::as_slice)
    }

    /// Iterate answered questions in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.responses
            .iter()
            .map(|(id, values)| (id.as_str(), values.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AnswerVisitor;

        impl<'de> Visitor<'de> for AnswerVisitor {
            type Value = AnswerSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map from question id to selected value(s)")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut responses = BTreeMap::new();
                while let Some((id, selection)) = access.next_entry::<String, OneOrMany>()? {
                    let values = match selection {
                        OneOrMany::One(value) => vec![value],
                        OneOrMany::Many(values) => values,
                    };
                    responses.insert(id, values);
                }
                Ok(AnswerSet { responses })
            }
        }

        deserializer.deserialize_map(AnswerVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accepts_string_and_array_values() {
        let answers: AnswerSet =
            serde_json::from_str(r#"{"q1": "commute", "q2": ["eco", "budget"]}"#).unwrap();

        assert_eq!(answers.get("q1"), Some(&["commute".to_string()][..]));
        assert_eq!(answers.get("q2").unwrap().len(), 2);
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn test_serializes_as_arrays() {
        let answers = AnswerSet::new().select("q1", ["commute"]);
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json, serde_json::json!({"q1": ["commute"]}));
    }

    #[test]
    fn test_builder_replaces_previous_selection() {
        let answers = AnswerSet::new()
            .select("q1", ["a"])
            .select("q1", ["b", "c"]);
        assert_eq!(answers.get("q1").unwrap(), &["b", "c"]);
    }
}
