//! Begin Reflection use case
//!
//! Wraps the daily reflection walk into a quiz run. The reflection set is
//! always present (the source owns its content), so this use case cannot
//! fail.

use crate::ports::question_source::QuestionSourcePort;
use selah_domain::QuizRun;
use std::sync::Arc;
use tracing::info;

/// Use case for launching the daily reflection from the Home view
pub struct BeginReflectionUseCase<S: QuestionSourcePort> {
    source: Arc<S>,
}

impl<S: QuestionSourcePort> BeginReflectionUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub fn execute(&self) -> QuizRun {
        let set = self.source.daily_reflection();
        info!(questions = set.len(), "beginning daily reflection");
        QuizRun::start(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::question_source::SourceError;
    use selah_domain::{Question, QuestionKind, QuestionSet, QuizMode, TopicInfo, TopicKey};

    struct StubSource;

    impl QuestionSourcePort for StubSource {
        fn question_set(
            &self,
            topic: &TopicKey,
        ) -> Result<QuestionSet, SourceError> {
            Err(SourceError::TopicNotFound {
                topic: topic.to_string(),
            })
        }

        fn daily_reflection(&self) -> QuestionSet {
            QuestionSet::new(
                "Daily Reflection",
                vec![Question::reflection(
                    1,
                    "Cast all your anxiety on him because he cares for you.",
                    "1 Peter 5:7",
                    "When facing anxiety, what feels most natural to you?",
                    vec!["I pray".into(), "I worry".into()],
                    "God invites us to release our burdens to Him.",
                    "Learning to trust is a journey.",
                )],
            )
            .unwrap()
        }

        fn topics(&self, _mode: QuizMode) -> Vec<TopicInfo> {
            vec![]
        }
    }

    #[test]
    fn test_reflection_run_starts_at_first_question() {
        let use_case = BeginReflectionUseCase::new(Arc::new(StubSource));
        let run = use_case.execute();
        assert_eq!(run.current_index(), 0);
        assert_eq!(run.current_question().kind, QuestionKind::Reflection);
        assert_eq!(run.set().title(), "Daily Reflection");
    }
}
