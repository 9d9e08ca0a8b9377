//! Documents exchanged with the review backend.

use serde::{Deserialize, Serialize};

/// Summary of one reviewed game, as listed in the catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub hash: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub white: String,
    #[serde(default)]
    pub black: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub actual_result: String,
    /// Only the length is meaningful to the viewer.
    #[serde(default)]
    pub moves: Vec<serde_json::Value>,
    #[serde(default)]
    pub pgn: String,
}

impl CatalogEntry {
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

/// Full per-move review of one game, aligned by index with its move list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewDocument {
    #[serde(default)]
    pub moves: Vec<PerMoveReview>,
}

impl ReviewDocument {
    /// Review for half-move `index`; `None` past the analysed prefix.
    pub fn get(&self, index: usize) -> Option<&PerMoveReview> {
        self.moves.get(index)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerMoveReview {
    #[serde(default)]
    pub evaluation: f64,
    #[serde(default)]
    pub classification: Classification,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "type", default)]
    pub kind: ClassificationKind,
}

/// Quality label of a half-move. Labels the viewer does not know are kept
/// verbatim in `Other` rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClassificationKind {
    Brilliant,
    Great,
    Inaccuracy,
    Mistake,
    Blunder,
    #[default]
    None,
    Other(String),
}

impl ClassificationKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Brilliant => "brilliant",
            Self::Great => "great",
            Self::Inaccuracy => "inaccuracy",
            Self::Mistake => "mistake",
            Self::Blunder => "blunder",
            Self::None => "none",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for ClassificationKind {
    fn from(label: String) -> Self {
        match label.as_str() {
            "brilliant" => Self::Brilliant,
            "great" => Self::Great,
            "inaccuracy" => Self::Inaccuracy,
            "mistake" => Self::Mistake,
            "blunder" => Self::Blunder,
            "none" | "" => Self::None,
            _ => Self::Other(label),
        }
    }
}

impl From<ClassificationKind> for String {
    fn from(kind: ClassificationKind) -> Self {
        match kind {
            ClassificationKind::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Configuration document, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub paths: ReviewPaths,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPaths {
    /// Location of the catalog document.
    pub gathered_reviews: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_entry_from_json() {
        let json = r#"{
            "hash": "abc",
            "path": "reviews/abc.json",
            "white": "Alice",
            "black": "Bob",
            "date": "2023.05.01",
            "actualResult": "1-0",
            "moves": [{}, {}, {}],
            "pgn": "1. e4 e5 2. Nf3 1-0"
        }"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.hash, "abc");
        assert_eq!(entry.actual_result, "1-0");
        assert_eq!(entry.move_count(), 3);
    }

    #[test]
    fn catalog_entry_tolerates_missing_fields() {
        let entry: CatalogEntry = serde_json::from_str(r#"{"hash": "x"}"#).unwrap();
        assert_eq!(entry.move_count(), 0);
        assert!(entry.pgn.is_empty());
    }

    #[test]
    fn unknown_classification_is_kept_not_rejected() {
        let json = r#"{"moves": [
            {"evaluation": 1.5, "classification": {"type": "blunder"}},
            {"evaluation": -0.3, "classification": {"type": "book"}},
            {"evaluation": 0.0}
        ]}"#;
        let review: ReviewDocument = serde_json::from_str(json).unwrap();
        assert_eq!(review.moves[0].classification.kind, ClassificationKind::Blunder);
        assert_eq!(
            review.moves[1].classification.kind,
            ClassificationKind::Other("book".to_string())
        );
        assert_eq!(review.moves[2].classification.kind, ClassificationKind::None);
        assert!(review.get(3).is_none());
    }

    #[test]
    fn classification_serializes_as_label() {
        let review = PerMoveReview {
            evaluation: 0.5,
            classification: Classification {
                kind: ClassificationKind::Great,
            },
        };
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["classification"]["type"], "great");
    }

    #[test]
    fn configuration_from_json() {
        let config: Configuration =
            serde_json::from_str(r#"{"paths": {"gathered_reviews": "reviews/gathered.json"}}"#)
                .unwrap();
        assert_eq!(config.paths.gathered_reviews, "reviews/gathered.json");
    }
}
