//! Question and question set value objects

use super::error::QuizError;
use serde::{Deserialize, Serialize};

/// The kind of a quiz question.
///
/// `Reflection` questions carry illustrative options but no correct answer —
/// they prompt free reflection and are never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    Reflection,
}

impl QuestionKind {
    /// Returns the canonical string representation.
    pub fn as_str(&self) -> &str {
        match self {
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::TrueFalse => "true_false",
            QuestionKind::Reflection => "reflection",
        }
    }

    /// Badge label shown above the prompt.
    pub fn display_name(&self) -> &str {
        match self {
            QuestionKind::MultipleChoice => "Multiple Choice",
            QuestionKind::TrueFalse => "True or False",
            QuestionKind::Reflection => "Reflection",
        }
    }

    /// Whether questions of this kind have a correctness concept.
    pub fn is_scored(&self) -> bool {
        !matches!(self, QuestionKind::Reflection)
    }
}

impl std::str::FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "multiple_choice" | "multiple" => Ok(QuestionKind::MultipleChoice),
            "true_false" | "truefalse" => Ok(QuestionKind::TrueFalse),
            "reflection" => Ok(QuestionKind::Reflection),
            _ => Err(format!("Invalid QuestionKind: {}", s)),
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single quiz question (Value Object).
///
/// The engine treats `verse`, `reference`, `prompt`, `explanation`, and
/// `follow_up` as opaque display strings; only `options` and
/// `correct_option` participate in transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub kind: QuestionKind,
    pub verse: String,
    pub reference: String,
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`; `None` for `Reflection` questions.
    pub correct_option: Option<usize>,
    pub explanation: String,
    pub follow_up: String,
}

impl Question {
    pub fn multiple_choice(
        id: u32,
        verse: impl Into<String>,
        reference: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
        explanation: impl Into<String>,
        follow_up: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind: QuestionKind::MultipleChoice,
            verse: verse.into(),
            reference: reference.into(),
            prompt: prompt.into(),
            options,
            correct_option: Some(correct_option),
            explanation: explanation.into(),
            follow_up: follow_up.into(),
        }
    }

    /// A true/false question. `answer` is the truth of the statement, mapped
    /// onto a fixed `["True", "False"]` option pair.
    pub fn true_false(
        id: u32,
        verse: impl Into<String>,
        reference: impl Into<String>,
        prompt: impl Into<String>,
        answer: bool,
        explanation: impl Into<String>,
        follow_up: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind: QuestionKind::TrueFalse,
            verse: verse.into(),
            reference: reference.into(),
            prompt: prompt.into(),
            options: vec!["True".to_string(), "False".to_string()],
            correct_option: Some(if answer { 0 } else { 1 }),
            explanation: explanation.into(),
            follow_up: follow_up.into(),
        }
    }

    pub fn reflection(
        id: u32,
        verse: impl Into<String>,
        reference: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
        explanation: impl Into<String>,
        follow_up: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind: QuestionKind::Reflection,
            verse: verse.into(),
            reference: reference.into(),
            prompt: prompt.into(),
            options,
            correct_option: None,
            explanation: explanation.into(),
            follow_up: follow_up.into(),
        }
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// An ordered, immutable collection of questions (Entity).
///
/// Construction enforces the set invariants; a run never mutates or reorders
/// its set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    title: String,
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Create a validated question set.
    ///
    /// Fails if the set is empty, any question has no options, or any
    /// `correct_option` is out of range for its question.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, QuizError> {
        let title = title.into();
        if questions.is_empty() {
            return Err(QuizError::EmptySet { set: title });
        }
        for question in &questions {
            if question.options.is_empty() {
                return Err(QuizError::NoOptions {
                    set: title.clone(),
                    question: question.id,
                });
            }
            if let Some(index) = question.correct_option
                && index >= question.options.len()
            {
                return Err(QuizError::CorrectOptionOutOfRange {
                    set: title.clone(),
                    question: question.id,
                    index,
                    available: question.options.len(),
                });
            }
        }
        Ok(Self { title, questions })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question(id: u32) -> Question {
        Question::multiple_choice(
            id,
            "Now faith is confidence in what we hope for.",
            "Hebrews 11:1",
            "Faith is best described as:",
            vec!["Proof".into(), "Confidence in unseen hopes".into()],
            1,
            "Faith is confidence and assurance.",
            "Where might you be invited to trust?",
        )
    }

    #[test]
    fn test_question_kind_as_str() {
        assert_eq!(QuestionKind::MultipleChoice.as_str(), "multiple_choice");
        assert_eq!(QuestionKind::TrueFalse.as_str(), "true_false");
        assert_eq!(QuestionKind::Reflection.as_str(), "reflection");
    }

    #[test]
    fn test_question_kind_from_str() {
        assert_eq!(
            "multiple".parse::<QuestionKind>().unwrap(),
            QuestionKind::MultipleChoice
        );
        assert_eq!(
            "truefalse".parse::<QuestionKind>().unwrap(),
            QuestionKind::TrueFalse
        );
        assert_eq!(
            "REFLECTION".parse::<QuestionKind>().unwrap(),
            QuestionKind::Reflection
        );
        assert!("essay".parse::<QuestionKind>().is_err());
    }

    #[test]
    fn test_question_kind_is_scored() {
        assert!(QuestionKind::MultipleChoice.is_scored());
        assert!(QuestionKind::TrueFalse.is_scored());
        assert!(!QuestionKind::Reflection.is_scored());
    }

    #[test]
    fn test_question_kind_serde_roundtrip() {
        for kind in [
            QuestionKind::MultipleChoice,
            QuestionKind::TrueFalse,
            QuestionKind::Reflection,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            let back: QuestionKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn test_true_false_maps_answer_to_option_index() {
        let q = Question::true_false(1, "v", "r", "p", true, "e", "f");
        assert_eq!(q.options, vec!["True".to_string(), "False".to_string()]);
        assert_eq!(q.correct_option, Some(0));

        let q = Question::true_false(1, "v", "r", "p", false, "e", "f");
        assert_eq!(q.correct_option, Some(1));
    }

    #[test]
    fn test_reflection_has_no_correct_option() {
        let q = Question::reflection(1, "v", "r", "p", vec!["a".into(), "b".into()], "e", "f");
        assert_eq!(q.correct_option, None);
        assert_eq!(q.kind, QuestionKind::Reflection);
    }

    #[test]
    fn test_set_rejects_empty() {
        let err = QuestionSet::new("Faith", vec![]).unwrap_err();
        assert_eq!(err, QuizError::EmptySet { set: "Faith".into() });
    }

    #[test]
    fn test_set_rejects_question_without_options() {
        let mut q = sample_question(1);
        q.options.clear();
        q.correct_option = None;
        let err = QuestionSet::new("Faith", vec![q]).unwrap_err();
        assert!(matches!(err, QuizError::NoOptions { question: 1, .. }));
    }

    #[test]
    fn test_set_rejects_out_of_range_correct_option() {
        let mut q = sample_question(2);
        q.correct_option = Some(9);
        let err = QuestionSet::new("Faith", vec![q]).unwrap_err();
        assert!(matches!(
            err,
            QuizError::CorrectOptionOutOfRange {
                question: 2,
                index: 9,
                available: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_set_accessors() {
        let set = QuestionSet::new("Faith", vec![sample_question(1), sample_question(2)]).unwrap();
        assert_eq!(set.title(), "Faith");
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.question(0).unwrap().id, 1);
        assert!(set.question(2).is_none());
    }
}
