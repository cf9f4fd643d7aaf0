//! Reference dataset: question id → ideal answer and required keywords.

use crate::config::interpolate_env_vars;
use crate::error::ReferenceError;
use crate::types::ReferenceAnswer;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ReferenceFile {
    #[serde(default)]
    question: Vec<QuestionEntry>,
}

#[derive(Debug, Deserialize)]
struct QuestionEntry {
    id: String,
    ideal_answer: String,
    #[serde(default)]
    keywords: KeywordField,
}

/// Keywords may be written as a comma-delimited string or as an array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KeywordField {
    Delimited(String),
    List(Vec<String>),
}

impl Default for KeywordField {
    fn default() -> Self {
        KeywordField::List(Vec::new())
    }
}

impl KeywordField {
    fn into_keywords(self) -> Vec<String> {
        match self {
            KeywordField::Delimited(raw) => split_keywords(&raw),
            KeywordField::List(items) => items
                .iter()
                .map(|k| k.trim())
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Split a comma-delimited keyword string, trimming and dropping empty entries.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read-only lookup of reference answers for one batch run.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    entries: HashMap<String, ReferenceAnswer>,
}

impl ReferenceSet {
    pub fn load_from_file(path: &Path) -> Result<Self, ReferenceError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ReferenceError> {
        let interpolated = interpolate_env_vars(s)?;
        let file: ReferenceFile = toml::from_str(&interpolated)?;
        Self::from_answers(file.question.into_iter().map(|q| ReferenceAnswer {
            id: q.id.trim().to_string(),
            ideal_answer: q.ideal_answer,
            keywords: q.keywords.into_keywords(),
        }))
    }

    pub fn from_answers(
        answers: impl IntoIterator<Item = ReferenceAnswer>,
    ) -> Result<Self, ReferenceError> {
        let mut entries = HashMap::new();
        for answer in answers {
            if answer.id.is_empty() {
                return Err(ReferenceError::EmptyId);
            }
            if entries.contains_key(&answer.id) {
                return Err(ReferenceError::DuplicateId(answer.id));
            }
            entries.insert(answer.id.clone(), answer);
        }
        tracing::debug!("loaded {} reference answer(s)", entries.len());
        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&ReferenceAnswer> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.entries.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keywords_trims_and_drops_empty() {
        assert_eq!(
            split_keywords(" learn from data ,systems,, "),
            vec!["learn from data", "systems"]
        );
        assert!(split_keywords("").is_empty());
        assert!(split_keywords(" , ").is_empty());
    }

    #[test]
    fn test_reference_set_parses_delimited_keywords() {
        let toml_str = r#"
[[question]]
id = " interview_question_1 "
ideal_answer = "Machine Learning is a subset of AI that focuses on building systems that learn from data."
keywords = "learn from data, systems"

[[question]]
id = "interview_question_2"
ideal_answer = "Supervised learning uses labeled data while unsupervised uses unlabeled data."
keywords = ["labeled data", " unlabeled "]
"#;
        let set = ReferenceSet::from_toml_str(toml_str).unwrap();
        assert_eq!(set.len(), 2);
        let q1 = set.get("interview_question_1").unwrap();
        assert_eq!(q1.keywords, vec!["learn from data", "systems"]);
        let q2 = set.get("interview_question_2").unwrap();
        assert_eq!(q2.keywords, vec!["labeled data", "unlabeled"]);
        assert_eq!(set.ids(), vec!["interview_question_1", "interview_question_2"]);
    }

    #[test]
    fn test_reference_set_missing_keywords_is_empty_list() {
        let toml_str = r#"
[[question]]
id = "q"
ideal_answer = "anything"
"#;
        let set = ReferenceSet::from_toml_str(toml_str).unwrap();
        assert!(set.get("q").unwrap().keywords.is_empty());
    }

    #[test]
    fn test_reference_set_unknown_id_is_none() {
        let set = ReferenceSet::from_toml_str("").unwrap();
        assert!(set.is_empty());
        assert!(set.get("nope").is_none());
    }

    #[test]
    fn test_reference_set_duplicate_id_fails() {
        let toml_str = r#"
[[question]]
id = "q"
ideal_answer = "a"

[[question]]
id = "q "
ideal_answer = "b"
"#;
        match ReferenceSet::from_toml_str(toml_str) {
            Err(ReferenceError::DuplicateId(id)) => assert_eq!(id, "q"),
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn test_reference_set_empty_id_fails() {
        let toml_str = r#"
[[question]]
id = "  "
ideal_answer = "a"
"#;
        assert!(matches!(
            ReferenceSet::from_toml_str(toml_str),
            Err(ReferenceError::EmptyId)
        ));
    }

    #[test]
    fn test_reference_set_load_from_file_not_found() {
        let result = ReferenceSet::load_from_file(Path::new("/nonexistent/refs.toml"));
        assert!(matches!(result, Err(ReferenceError::FileRead(_))));
    }
}
