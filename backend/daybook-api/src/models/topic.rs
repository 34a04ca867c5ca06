/// Forum topic keys.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whitespace-stripped identifier grouping posts by subject.
///
/// Both the create and list paths derive keys through here, so a post
/// created under "Personal Development" is retrievable under the same key
/// the lookup derives. Case and punctuation are preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// Derive a topic key from a human-readable label by removing all
    /// whitespace. Returns `None` when nothing remains.
    pub fn from_label(label: &str) -> Option<Self> {
        let key: String = label.split_whitespace().collect();
        if key.is_empty() {
            None
        } else {
            Some(Topic(key))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_interior_and_edge_whitespace() {
        assert_eq!(
            Topic::from_label("Mental Health").unwrap().as_str(),
            "MentalHealth"
        );
        assert_eq!(
            Topic::from_label("  Personal   Development ").unwrap().as_str(),
            "PersonalDevelopment"
        );
    }

    #[test]
    fn preserves_case_and_punctuation() {
        assert_eq!(
            Topic::from_label("self-care 101").unwrap().as_str(),
            "self-care101"
        );
        assert_eq!(Topic::from_label("Finances").unwrap().as_str(), "Finances");
    }

    #[test]
    fn blank_labels_have_no_key() {
        assert!(Topic::from_label("").is_none());
        assert!(Topic::from_label("   \t ").is_none());
    }
}
