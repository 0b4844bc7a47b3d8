//! Meeting minutes entity

/// Field names of [`MeetingMinutes`], in the fixed section order used for
/// display and export.
pub const FIELD_NAMES: &[&str] = &[
    "abstract_summary",
    "key_points",
    "action_items",
    "sentiment",
];

/// Structured minutes assembled from one meeting transcript.
/// Each field is exactly what the extraction service returned for its mode;
/// no post-processing or validation is applied. Immutable after assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingMinutes {
    abstract_summary: String,
    key_points: String,
    action_items: String,
    sentiment: String,
}

impl MeetingMinutes {
    /// Assemble minutes from the four extraction results
    pub fn new(
        abstract_summary: impl Into<String>,
        key_points: impl Into<String>,
        action_items: impl Into<String>,
        sentiment: impl Into<String>,
    ) -> Self {
        Self {
            abstract_summary: abstract_summary.into(),
            key_points: key_points.into(),
            action_items: action_items.into(),
            sentiment: sentiment.into(),
        }
    }

    pub fn abstract_summary(&self) -> &str {
        &self.abstract_summary
    }

    pub fn key_points(&self) -> &str {
        &self.key_points
    }

    pub fn action_items(&self) -> &str {
        &self.action_items
    }

    pub fn sentiment(&self) -> &str {
        &self.sentiment
    }

    /// Iterate the sections as (field name, text) pairs in fixed order
    pub fn sections(&self) -> [(&'static str, &str); 4] {
        [
            ("abstract_summary", self.abstract_summary.as_str()),
            ("key_points", self.key_points.as_str()),
            ("action_items", self.action_items.as_str()),
            ("sentiment", self.sentiment.as_str()),
        ]
    }
}

/// Convert a field name into a human-readable section title by splitting on
/// underscores and capitalizing each word ("abstract_summary" -> "Abstract Summary").
pub fn section_title(field_name: &str) -> String {
    field_name
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
