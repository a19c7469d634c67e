use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which inspiration voice(s) flavor a generation request.
///
/// Serializes as the lowercase name; deserializes through `FromStr`, so
/// resubmitted ideas accept the same spellings as the ideas request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Allison,
    Ines,
    Rita,
    #[default]
    Blend,
}

/// Returned by `Style::from_str` for anything outside the four selectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid style '{0}'. Must be one of: allison, ines, rita, blend")]
pub struct UnknownStyle(pub String);

impl Style {
    pub const ALL: [Style; 4] = [Style::Allison, Style::Ines, Style::Rita, Style::Blend];

    /// The three single-voice styles, in the order they appear in blended prompts.
    pub const NAMED: [Style; 3] = [Style::Allison, Style::Ines, Style::Rita];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Allison => "allison",
            Style::Ines => "ines",
            Style::Rita => "rita",
            Style::Blend => "blend",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Style::Allison => "Allison",
            Style::Ines => "Ines",
            Style::Rita => "Rita",
            Style::Blend => "Blend",
        }
    }

    /// One-sentence steer appended to prompts for this style.
    pub fn guidance(self) -> &'static str {
        match self {
            Style::Allison => {
                "Borrow Allison's warmth and storytelling: open with a personal moment, \
                keep sentences conversational, and let the lesson emerge from the story."
            }
            Style::Ines => {
                "Borrow Ines's clarity and structure: lead with a sharp claim, back it with \
                concrete frameworks, and keep every paragraph purposeful."
            }
            Style::Rita => {
                "Borrow Rita's boldness: take a contrarian stance, use punchy short lines, \
                and challenge the reader directly."
            }
            Style::Blend => {
                "Blend the strengths of all three inspiration voices: Allison's storytelling, \
                Ines's structure, and Rita's boldness, while the primary voice stays dominant."
            }
        }
    }

    /// Maps free-text style labels produced by the model onto a `Style`.
    /// Anything that is not one of the three named voices becomes `Blend`.
    pub fn normalize(raw: &str) -> Style {
        let cleaned = raw
            .trim()
            .trim_matches(|c: char| c == '*' || c == '"' || c == '\'' || c == '`')
            .trim_end_matches(|c: char| c.is_ascii_punctuation())
            .trim();

        Style::NAMED
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(cleaned))
            .unwrap_or(Style::Blend)
    }
}

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Style::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
