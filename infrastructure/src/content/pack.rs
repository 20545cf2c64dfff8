//! TOML question packs — user-supplied topics layered over the built-ins.
//!
//! A pack file declares one topic and its questions:
//!
//! ```toml
//! [topic]
//! mode = "theme"
//! slug = "patience"
//! title = "Patience"
//!
//! [[questions]]
//! id = 1
//! kind = "true_false"
//! verse = "Be still before the Lord and wait patiently for him."
//! reference = "Psalm 37:7"
//! prompt = "Waiting patiently is presented as a posture before God."
//! answer = true
//! explanation = "True! Stillness and patient waiting go together here."
//! follow_up = "What are you waiting on right now?"
//! ```

use selah_domain::{Question, QuestionKind, QuestionSet, QuizError, TopicKey};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors from loading a question pack
#[derive(Error, Debug)]
pub enum PackError {
    #[error("failed to read pack {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse pack {path}: {source}")]
    Parse {
        path: String,
        source: Box<toml::de::Error>,
    },

    #[error("question {id}: unknown kind '{kind}'")]
    UnknownKind { id: u32, kind: String },

    #[error("question {id}: scored question needs a correct_option or answer")]
    MissingAnswer { id: u32 },

    #[error(transparent)]
    InvalidSet(#[from] QuizError),
}

/// Raw TOML structure of a pack file.
#[derive(Debug, Clone, Deserialize)]
pub struct PackFile {
    pub topic: PackTopic,
    #[serde(default)]
    pub questions: Vec<PackQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackTopic {
    pub mode: selah_domain::QuizMode,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub locked: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackQuestion {
    pub id: u32,
    pub kind: String,
    pub verse: String,
    pub reference: String,
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
    /// Index form, for multiple choice.
    pub correct_option: Option<usize>,
    /// Boolean shorthand for true/false questions.
    pub answer: Option<bool>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub follow_up: String,
}

/// A pack converted into domain types, ready for catalog insertion.
#[derive(Debug, Clone)]
pub struct LoadedPack {
    pub key: TopicKey,
    pub title: String,
    pub locked: bool,
    pub set: QuestionSet,
}

/// Load and validate a pack from disk.
pub fn load(path: &Path) -> Result<LoadedPack, PackError> {
    let text = std::fs::read_to_string(path).map_err(|source| PackError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let file: PackFile = toml::from_str(&text).map_err(|source| PackError::Parse {
        path: path.display().to_string(),
        source: Box::new(source),
    })?;
    let pack = convert(file)?;
    info!(topic = %pack.key, questions = pack.set.len(), "loaded question pack");
    Ok(pack)
}

/// Convert a parsed pack into domain types, enforcing the set invariants.
pub fn convert(file: PackFile) -> Result<LoadedPack, PackError> {
    let key = TopicKey::new(file.topic.mode, &file.topic.slug);

    let mut questions = Vec::with_capacity(file.questions.len());
    for raw in file.questions {
        questions.push(convert_question(raw)?);
    }

    let set = QuestionSet::new(file.topic.title.clone(), questions)?;
    Ok(LoadedPack {
        key,
        title: file.topic.title,
        locked: file.topic.locked,
        set,
    })
}

fn convert_question(raw: PackQuestion) -> Result<Question, PackError> {
    let kind: QuestionKind = raw.kind.parse().map_err(|_| PackError::UnknownKind {
        id: raw.id,
        kind: raw.kind.clone(),
    })?;

    let question = match kind {
        QuestionKind::MultipleChoice => {
            let correct = raw
                .correct_option
                .ok_or(PackError::MissingAnswer { id: raw.id })?;
            Question::multiple_choice(
                raw.id,
                raw.verse,
                raw.reference,
                raw.prompt,
                raw.options,
                correct,
                raw.explanation,
                raw.follow_up,
            )
        }
        QuestionKind::TrueFalse => {
            // Accept either the boolean shorthand or an explicit index.
            let answer = match (raw.answer, raw.correct_option) {
                (Some(answer), _) => answer,
                (None, Some(index)) => index == 0,
                (None, None) => return Err(PackError::MissingAnswer { id: raw.id }),
            };
            Question::true_false(
                raw.id,
                raw.verse,
                raw.reference,
                raw.prompt,
                answer,
                raw.explanation,
                raw.follow_up,
            )
        }
        QuestionKind::Reflection => Question::reflection(
            raw.id,
            raw.verse,
            raw.reference,
            raw.prompt,
            raw.options,
            raw.explanation,
            raw.follow_up,
        ),
    };
    Ok(question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use selah_domain::QuizMode;
    use std::io::Write;

    const VALID_PACK: &str = r#"
[topic]
mode = "theme"
slug = "Patience"
title = "Patience"

[[questions]]
id = 1
kind = "true_false"
verse = "Be still before the Lord and wait patiently for him."
reference = "Psalm 37:7"
prompt = "Waiting patiently is presented as a posture before God."
answer = true
explanation = "True! Stillness and patient waiting go together here."
follow_up = "What are you waiting on right now?"

[[questions]]
id = 2
kind = "multiple"
verse = "Love is patient, love is kind."
reference = "1 Corinthians 13:4"
prompt = "Patience is listed first as a mark of:"
options = ["Success", "Love", "Wisdom", "Strength"]
correct_option = 1
explanation = "Paul opens his description of love with patience."
follow_up = "Where is patience being asked of you?"
"#;

    #[test]
    fn test_valid_pack_converts() {
        let file: PackFile = toml::from_str(VALID_PACK).unwrap();
        let pack = convert(file).unwrap();
        assert_eq!(pack.key, TopicKey::theme("patience"));
        assert_eq!(pack.title, "Patience");
        assert!(!pack.locked);
        assert_eq!(pack.set.len(), 2);
        assert_eq!(pack.set.question(0).unwrap().correct_option, Some(0));
        assert_eq!(pack.set.question(1).unwrap().correct_option, Some(1));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID_PACK.as_bytes()).unwrap();
        let pack = load(file.path()).unwrap();
        assert_eq!(pack.key.mode(), QuizMode::Theme);
        assert_eq!(pack.set.title(), "Patience");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load(Path::new("/nonexistent/pack.toml")).unwrap_err();
        assert!(matches!(err, PackError::Read { .. }));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let file: PackFile = toml::from_str(
            r#"
[topic]
mode = "book"
slug = "ruth"
title = "Ruth"

[[questions]]
id = 7
kind = "essay"
verse = "v"
reference = "r"
prompt = "p"
"#,
        )
        .unwrap();
        let err = convert(file).unwrap_err();
        assert!(matches!(
            err,
            PackError::UnknownKind { id: 7, ref kind } if kind == "essay"
        ));
    }

    #[test]
    fn test_scored_question_without_answer_rejected() {
        let file: PackFile = toml::from_str(
            r#"
[topic]
mode = "theme"
slug = "t"
title = "T"

[[questions]]
id = 3
kind = "multiple"
verse = "v"
reference = "r"
prompt = "p"
options = ["a", "b"]
"#,
        )
        .unwrap();
        let err = convert(file).unwrap_err();
        assert!(matches!(err, PackError::MissingAnswer { id: 3 }));
    }

    #[test]
    fn test_out_of_range_correct_option_names_question() {
        let file: PackFile = toml::from_str(
            r#"
[topic]
mode = "theme"
slug = "t"
title = "T"

[[questions]]
id = 9
kind = "multiple"
verse = "v"
reference = "r"
prompt = "p"
options = ["a", "b"]
correct_option = 5
"#,
        )
        .unwrap();
        let err = convert(file).unwrap_err();
        match err {
            PackError::InvalidSet(QuizError::CorrectOptionOutOfRange {
                question, index, ..
            }) => {
                assert_eq!(question, 9);
                assert_eq!(index, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_pack_rejected() {
        let file: PackFile = toml::from_str(
            r#"
[topic]
mode = "theme"
slug = "t"
title = "T"
"#,
        )
        .unwrap();
        let err = convert(file).unwrap_err();
        assert!(matches!(
            err,
            PackError::InvalidSet(QuizError::EmptySet { .. })
        ));
    }
}
