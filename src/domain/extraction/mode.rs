//! Extraction mode value object
//!
//! Each mode is one fixed analysis task applied to a meeting transcript.
//! The instruction templates are the single source of truth for request
//! construction: the chat adapter sends them verbatim as system guidance.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidModeError;

/// Instruction sent as system guidance for Summary mode
const SUMMARY_INSTRUCTION: &str = "You are a highly skilled AI trained in language comprehension and summarization. I would like you to read the following text and summarize it into a concise abstract paragraph. Aim to retain the most important points, providing a coherent and readable summary that could help a person understand the main points of the discussion without needing to read the entire text. Please avoid unnecessary details or tangential points.";

/// Instruction sent as system guidance for KeyPoints mode
const KEY_POINTS_INSTRUCTION: &str = "You are a proficient AI with a specialty in distilling information into key points. Based on the following text, identify and list the main points that were discussed or brought up. These should be the most important ideas, findings, or topics that are crucial to the essence of the discussion. Your goal is to provide a list that someone could read to quickly understand what was talked about.";

/// Instruction sent as system guidance for ActionItems mode
const ACTION_ITEMS_INSTRUCTION: &str = "You are an AI expert in analyzing conversations and extracting action items. Please review the text and identify any tasks, assignments, or actions that were agreed upon or mentioned as needing to be done. These could be tasks assigned to specific individuals, or general actions that the group has decided to take. Please list these action items clearly and concisely.";

/// Instruction sent as system guidance for Sentiment mode
const SENTIMENT_INSTRUCTION: &str = "As an AI with expertise in language and emotion analysis, your task is to analyze the sentiment of the following text. Please consider the overall tone of the discussion, the emotion conveyed by the language used, and the context in which words and phrases are used. Indicate whether the sentiment is generally positive, negative, or neutral, and provide brief explanations for your analysis where possible.";

/// Output cap for Summary mode, in completion tokens
const SUMMARY_MAX_TOKENS: u32 = 100;

/// All extraction modes, in assembly order
pub const ALL_MODES: &[ExtractionMode] = &[
    ExtractionMode::Summary,
    ExtractionMode::KeyPoints,
    ExtractionMode::ActionItems,
    ExtractionMode::Sentiment,
];

/// The four fixed extraction tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtractionMode {
    #[default]
    Summary,
    KeyPoints,
    ActionItems,
    Sentiment,
}

impl ExtractionMode {
    /// Get the human-readable label for this mode
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Summary => "Abstract Summary",
            Self::KeyPoints => "Key Points",
            Self::ActionItems => "Action Items",
            Self::Sentiment => "Sentiment",
        }
    }

    /// Get the fixed system instruction for this mode
    pub const fn instruction(&self) -> &'static str {
        match self {
            Self::Summary => SUMMARY_INSTRUCTION,
            Self::KeyPoints => KEY_POINTS_INSTRUCTION,
            Self::ActionItems => ACTION_ITEMS_INSTRUCTION,
            Self::Sentiment => SENTIMENT_INSTRUCTION,
        }
    }

    /// Sampling temperature; minimum for every mode to keep output
    /// deterministic-leaning
    pub const fn temperature(&self) -> f32 {
        0.0
    }

    /// Output length cap. Only Summary is bounded; the other modes let the
    /// remote service run to its own limit.
    pub const fn max_tokens(&self) -> Option<u32> {
        match self {
            Self::Summary => Some(SUMMARY_MAX_TOKENS),
            _ => None,
        }
    }

    /// Get the string identifier for this mode
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::KeyPoints => "key-points",
            Self::ActionItems => "action-items",
            Self::Sentiment => "sentiment",
        }
    }
}

impl FromStr for ExtractionMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "key-points" | "key_points" => Ok(Self::KeyPoints),
            "action-items" | "action_items" => Ok(Self::ActionItems),
            "sentiment" => Ok(Self::Sentiment),
            _ => Err(InvalidModeError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
