//! Detection records supplied by a perception source

use serde::{Deserialize, Serialize};
use std::fmt;

/// Object category tagged on a detection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// A worker
    Person,
    /// Safety helmet (hard hat)
    Helmet,
    /// Reflective high-visibility vest
    Vest,
    /// Any other label reported by the source (ladder, vehicle, ...).
    /// Prefer `from_label`, which never wraps a known label.
    Other(String),
}

impl Category {
    /// Canonical label used on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Category::Person => "person",
            Category::Helmet => "helmet",
            Category::Vest => "safety_vest",
            Category::Other(label) => label.as_str(),
        }
    }

    /// Parse a source label. Unknown labels are kept as `Other`.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "person" => Category::Person,
            "helmet" => Category::Helmet,
            "safety_vest" | "vest" => Category::Vest,
            _ => Category::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::from_label(label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed object instance.
///
/// Only `category` is read by the rule engine. `confidence` and `bbox` are
/// carried for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Category tag; `None` when the source omitted it
    #[serde(rename = "class_name", default)]
    pub category: Option<Category>,

    /// Detection confidence (0.0 to 1.0); `None` when the source reports no score
    #[serde(default)]
    pub confidence: Option<f32>,

    /// Bounding box [x1, y1, x2, y2]
    #[serde(default)]
    pub bbox: [f32; 4],
}

impl Detection {
    /// Create a detection with a known category
    pub fn new(category: Category, confidence: f32, bbox: [f32; 4]) -> Self {
        Self {
            category: Some(category),
            confidence: Some(confidence),
            bbox,
        }
    }

    /// Create a detection with no category tag
    pub fn untagged(confidence: f32, bbox: [f32; 4]) -> Self {
        Self {
            category: None,
            confidence: Some(confidence),
            bbox,
        }
    }

    /// Check whether this detection carries the given category
    pub fn is(&self, category: &Category) -> bool {
        self.category.as_ref() == Some(category)
    }
}
