use serde::{Deserialize, Serialize};

/// One dictionary entry as returned by the remote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

impl Definition {
    /// Entry with a word and nothing else, mostly useful in tests
    pub fn bare(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            phonetic: None,
            phonetics: vec![],
            origin: None,
            meanings: vec![],
            source_urls: vec![],
        }
    }

    /// First sense of the first meaning, the one shown in list rows
    pub fn summary(&self) -> Option<&Sense> {
        self.meanings
            .first()
            .and_then(|meaning| meaning.definitions.first())
    }

    /// Best pronunciation text available
    pub fn pronunciation(&self) -> Option<&str> {
        self.phonetic.as_deref().or_else(|| {
            self.phonetics
                .iter()
                .find_map(|phonetic| phonetic.text.as_deref())
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Sense>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// A single definition line inside a meaning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// A past search, keyed by its timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub word: Definition,
    /// ISO-8601, UTC, millisecond precision
    pub timestamp: String,
}
