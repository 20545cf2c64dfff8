//! Start Quiz use case
//!
//! Resolves a topic to its question set — applying the caller-owned
//! fallback policy when the topic is unknown — and begins a quiz run.

use crate::ports::question_source::{QuestionSourcePort, SourceError};
use selah_domain::{QuizRun, TopicKey};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur when starting a quiz
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StartQuizError {
    #[error("no question set for '{topic}' and no fallback configured")]
    TopicNotFound { topic: String },

    #[error("neither '{topic}' nor fallback '{fallback}' has a question set")]
    FallbackNotFound { topic: String, fallback: String },
}

/// Input for the StartQuiz use case
#[derive(Debug, Clone)]
pub struct StartQuizInput {
    /// The topic the user picked.
    pub topic: TopicKey,
    /// Topic to fall back to when `topic` is unknown. Policy lives with the
    /// caller (configured per mode); `None` makes an unknown topic a hard
    /// error.
    pub fallback: Option<TopicKey>,
}

impl StartQuizInput {
    pub fn new(topic: TopicKey) -> Self {
        Self {
            topic,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: TopicKey) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

/// Output of the StartQuiz use case
#[derive(Debug, Clone)]
pub struct StartQuizOutput {
    pub run: QuizRun,
    /// The topic that actually resolved (the fallback when one applied).
    pub topic: TopicKey,
    pub fell_back: bool,
}

/// Use case for launching a quiz on a chosen topic
pub struct StartQuizUseCase<S: QuestionSourcePort> {
    source: Arc<S>,
}

impl<S: QuestionSourcePort> StartQuizUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub fn execute(&self, input: StartQuizInput) -> Result<StartQuizOutput, StartQuizError> {
        match self.source.question_set(&input.topic) {
            Ok(set) => {
                info!(topic = %input.topic, questions = set.len(), "starting quiz");
                Ok(StartQuizOutput {
                    run: QuizRun::start(set),
                    topic: input.topic,
                    fell_back: false,
                })
            }
            Err(SourceError::TopicNotFound { .. }) => {
                let Some(fallback) = input.fallback else {
                    return Err(StartQuizError::TopicNotFound {
                        topic: input.topic.to_string(),
                    });
                };
                let set = self.source.question_set(&fallback).map_err(|_| {
                    StartQuizError::FallbackNotFound {
                        topic: input.topic.to_string(),
                        fallback: fallback.to_string(),
                    }
                })?;
                warn!(topic = %input.topic, fallback = %fallback, "unknown topic, using fallback");
                Ok(StartQuizOutput {
                    run: QuizRun::start(set),
                    topic: fallback,
                    fell_back: true,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selah_domain::{Question, QuestionSet, QuizMode, TopicInfo};

    struct StubSource;

    impl QuestionSourcePort for StubSource {
        fn question_set(&self, topic: &TopicKey) -> Result<QuestionSet, SourceError> {
            if topic == &TopicKey::theme("faith") {
                Ok(QuestionSet::new(
                    "Faith",
                    vec![Question::true_false(1, "v", "r", "p", true, "e", "f")],
                )
                .unwrap())
            } else {
                Err(SourceError::TopicNotFound {
                    topic: topic.to_string(),
                })
            }
        }

        fn daily_reflection(&self) -> QuestionSet {
            QuestionSet::new(
                "Daily Reflection",
                vec![Question::reflection(
                    1,
                    "v",
                    "r",
                    "p",
                    vec!["a".into()],
                    "e",
                    "f",
                )],
            )
            .unwrap()
        }

        fn topics(&self, _mode: QuizMode) -> Vec<TopicInfo> {
            vec![]
        }
    }

    #[test]
    fn test_known_topic_starts_run() {
        let use_case = StartQuizUseCase::new(Arc::new(StubSource));
        let output = use_case
            .execute(StartQuizInput::new(TopicKey::theme("faith")))
            .unwrap();
        assert!(!output.fell_back);
        assert_eq!(output.topic, TopicKey::theme("faith"));
        assert_eq!(output.run.set().title(), "Faith");
    }

    #[test]
    fn test_unknown_topic_uses_fallback() {
        let use_case = StartQuizUseCase::new(Arc::new(StubSource));
        let output = use_case
            .execute(
                StartQuizInput::new(TopicKey::theme("patience"))
                    .with_fallback(TopicKey::theme("faith")),
            )
            .unwrap();
        assert!(output.fell_back);
        assert_eq!(output.topic, TopicKey::theme("faith"));
    }

    #[test]
    fn test_unknown_topic_without_fallback_fails() {
        let use_case = StartQuizUseCase::new(Arc::new(StubSource));
        let err = use_case
            .execute(StartQuizInput::new(TopicKey::theme("patience")))
            .unwrap_err();
        assert_eq!(
            err,
            StartQuizError::TopicNotFound {
                topic: "theme:patience".into(),
            }
        );
    }

    #[test]
    fn test_unknown_fallback_fails() {
        let use_case = StartQuizUseCase::new(Arc::new(StubSource));
        let err = use_case
            .execute(
                StartQuizInput::new(TopicKey::theme("patience"))
                    .with_fallback(TopicKey::book("ruth")),
            )
            .unwrap_err();
        assert_eq!(
            err,
            StartQuizError::FallbackNotFound {
                topic: "theme:patience".into(),
                fallback: "book:ruth".into(),
            }
        );
    }
}
