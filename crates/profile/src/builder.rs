use crate::answers::AnswerSet;
use crate::error::{Result, ValidationError};
use carmatch_catalog::{Dimension, DimensionVector, QuestionCatalog, DIMENSION_COUNT};

/// Neutral starting score for every dimension
const BASELINE: f32 = 5.0;

/// Maps the average accumulated delta onto the 1-10 scale: a fully aligned
/// average of +10 reaches 10, a fully opposed -10 reaches the clamp floor
const DELTA_SCALE: f32 = 0.5;

const SCORE_MIN: f32 = 1.0;
const SCORE_MAX: f32 = 10.0;

/// Fold a validated answer set into a lifestyle profile.
///
/// Every dimension starts at the neutral baseline 5. Each selected option
/// contributes its per-dimension deltas, weighted by `1 / selected_count` for
/// that question so multi-select answers average rather than stack. Touched
/// dimensions end at `clamp(5 + avg_delta * 0.5, 1, 10)` rounded to the
/// nearest integer (exact `.5` rounds up); untouched dimensions stay at 5.
pub fn build_profile(answers: &AnswerSet, questions: &QuestionCatalog) -> Result<DimensionVector> {
    let mut accumulated = [0.0f32; DIMENSION_COUNT];
    let mut touched = [0.0f32; DIMENSION_COUNT];

    for (question_id, selected) in answers.iter() {
        let question =
            questions
                .get(question_id)
                .ok_or_else(|| ValidationError::UnknownQuestion {
                    id: question_id.to_string(),
                })?;

        if selected.is_empty() {
            return Err(ValidationError::EmptySelection {
                question: question_id.to_string(),
            });
        }
        for (idx, value) in selected.iter().enumerate() {
            if selected[..idx].contains(value) {
                return Err(ValidationError::DuplicateSelection {
                    question: question_id.to_string(),
                    value: value.clone(),
                });
            }
        }
        let limit = question.selection_limit();
        if selected.len() > limit {
            return Err(ValidationError::TooManySelections {
                question: question_id.to_string(),
                limit,
                selected: selected.len(),
            });
        }

        let weight = 1.0 / selected.len() as f32;
        for value in selected {
            let option =
                question
                    .option(value)
                    .ok_or_else(|| ValidationError::UnknownOption {
                        question: question_id.to_string(),
                        value: value.clone(),
                    })?;

            for (dimension, delta) in option.scores.iter() {
                if delta != 0.0 {
                    accumulated[dimension.index()] += delta * weight;
                    touched[dimension.index()] += weight;
                }
            }
        }
    }

    let mut profile = DimensionVector::uniform(BASELINE);
    for dimension in Dimension::ALL {
        let weight = touched[dimension.index()];
        if weight > 0.0 {
            let average = accumulated[dimension.index()] / weight;
            let raw = BASELINE + average * DELTA_SCALE;
            // clamp() first so round() only ever sees positive values, where
            // it rounds half up
            profile.set(dimension, raw.clamp(SCORE_MIN, SCORE_MAX).round());
        }
    }

    log::debug!(
        "Built profile from {} answered question(s): {:?}",
        answers.len(),
        profile.values()
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn questionnaire() -> QuestionCatalog {
        QuestionCatalog::from_json_str(
            r#"{
                "questions": [
                    {
                        "id": "q1",
                        "prompt": "What does a typical drive look like?",
                        "options": [
                            {"value": "commuter_friendly", "label": "Daily commuting",
                             "scores": {"eco_conscious": 3, "commuter": 2}},
                            {"value": "track_days", "label": "Spirited weekend drives",
                             "scores": {"performance": 8, "eco_conscious": -4}}
                        ]
                    },
                    {
                        "id": "q2",
                        "prompt": "What matters most in a car?",
                        "multi_select": true,
                        "max_selections": 2,
                        "options": [
                            {"value": "eco_focused", "label": "Low emissions",
                             "scores": {"eco_conscious": 3, "commuter": 2}},
                            {"value": "latest_tech", "label": "The latest tech",
                             "scores": {"tech_enthusiast": 6}},
                            {"value": "room_for_kids", "label": "Room for the kids",
                             "scores": {"family_friendly": 7, "safety_focused": 4}}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_all_dimensions_present_and_in_range() {
        let answers = AnswerSet::new()
            .select("q1", ["track_days"])
            .select("q2", ["room_for_kids", "latest_tech"]);

        let profile = build_profile(&answers, &questionnaire()).unwrap();
        for (_, value) in profile.iter() {
            assert!((1.0..=10.0).contains(&value));
            assert_eq!(value, value.round());
        }
    }

    #[test]
    fn test_aligned_answers_raise_dimensions_above_baseline() {
        // Both options add +3 eco_conscious and +2 commuter; everything else
        // stays at the neutral baseline.
        let answers = AnswerSet::new()
            .select("q1", ["commuter_friendly"])
            .select("q2", ["eco_focused"]);

        let profile = build_profile(&answers, &questionnaire()).unwrap();
        assert!(profile.get(Dimension::EcoConscious) > BASELINE);
        assert!(profile.get(Dimension::Commuter) > BASELINE);
        assert_eq!(profile.get(Dimension::Luxury), BASELINE);
        assert_eq!(profile.get(Dimension::Adventure), BASELINE);

        // avg delta +3 -> 5 + 1.5 = 6.5 -> rounds up to 7
        assert_eq!(profile.get(Dimension::EcoConscious), 7.0);
        // avg delta +2 -> 5 + 1.0 = 6
        assert_eq!(profile.get(Dimension::Commuter), 6.0);
    }

    #[test]
    fn test_half_rounds_up() {
        // Single +1 delta: 5 + 0.5 = 5.5 must round to 6, not 5.
        let questions = QuestionCatalog::from_json_str(
            r#"{"questions": [{"id": "q1", "prompt": "p", "options": [
                {"value": "a", "label": "a", "scores": {"luxury": 1}}
            ]}]}"#,
        )
        .unwrap();
        let answers = AnswerSet::new().select("q1", ["a"]);

        let profile = build_profile(&answers, &questions).unwrap();
        assert_eq!(profile.get(Dimension::Luxury), 6.0);
    }

    #[test]
    fn test_opposed_deltas_clamp_to_floor() {
        let questions = QuestionCatalog::from_json_str(
            r#"{"questions": [{"id": "q1", "prompt": "p", "options": [
                {"value": "a", "label": "a", "scores": {"eco_conscious": -10}}
            ]}]}"#,
        )
        .unwrap();
        let answers = AnswerSet::new().select("q1", ["a"]);

        let profile = build_profile(&answers, &questions).unwrap();
        assert_eq!(profile.get(Dimension::EcoConscious), SCORE_MIN);
    }

    #[test]
    fn test_multi_select_averages_contributions() {
        let answers = AnswerSet::new().select("q2", ["eco_focused", "latest_tech"]);
        let profile = build_profile(&answers, &questionnaire()).unwrap();

        // Each selection weighs 1/2: eco accumulates 1.5 over weight 0.5 ->
        // avg 3 -> 6.5 -> 7; tech accumulates 3 over 0.5 -> avg 6 -> 8.
        assert_eq!(profile.get(Dimension::EcoConscious), 7.0);
        assert_eq!(profile.get(Dimension::TechEnthusiast), 8.0);
    }

    #[test]
    fn test_idempotent() {
        let answers = AnswerSet::new()
            .select("q1", ["commuter_friendly"])
            .select("q2", ["room_for_kids"]);
        let questions = questionnaire();

        let first = build_profile(&answers, &questions).unwrap();
        let second = build_profile(&answers, &questions).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_question_rejected() {
        let answers = AnswerSet::new().select("q99", ["whatever"]);
        let err = build_profile(&answers, &questionnaire()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownQuestion {
                id: "q99".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_option_rejected() {
        let answers = AnswerSet::new().select("q1", ["no_such_option"]);
        let err = build_profile(&answers, &questionnaire()).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownOption { .. }));
    }

    #[test]
    fn test_single_select_rejects_multiple_values() {
        let answers = AnswerSet::new().select("q1", ["commuter_friendly", "track_days"]);
        let err = build_profile(&answers, &questionnaire()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooManySelections {
                question: "q1".to_string(),
                limit: 1,
                selected: 2
            }
        );
    }

    #[test]
    fn test_multi_select_enforces_max_selections() {
        let answers =
            AnswerSet::new().select("q2", ["eco_focused", "latest_tech", "room_for_kids"]);
        let err = build_profile(&answers, &questionnaire()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooManySelections { limit: 2, .. }
        ));
    }

    #[test]
    fn test_duplicate_selection_rejected() {
        let answers = AnswerSet::new().select("q2", ["eco_focused", "eco_focused"]);
        let err = build_profile(&answers, &questionnaire()).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateSelection { .. }));
    }

    #[test]
    fn test_empty_answer_set_yields_neutral_profile() {
        let profile = build_profile(&AnswerSet::new(), &questionnaire()).unwrap();
        assert_eq!(profile, DimensionVector::uniform(BASELINE));
    }
}
