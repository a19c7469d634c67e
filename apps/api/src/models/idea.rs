use serde::{Deserialize, Serialize};

use crate::models::style::Style;

pub const DEFAULT_AUDIENCE: &str = "General audience";
pub const NO_STRUCTURE_PLACEHOLDER: &str = "No structure provided";

/// A brainstormed content idea extracted from model output.
///
/// Never persisted server-side: the client keeps the authoritative copy and
/// re-submits the ideas it wants expanded into articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub style: Style,
    #[serde(default = "default_audience")]
    pub audience: String,
    #[serde(default)]
    pub angle: String,
    #[serde(default)]
    pub hook_example: String,
    #[serde(default = "default_structure")]
    pub structure: Vec<String>,
}

fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}

fn default_structure() -> Vec<String> {
    vec![NO_STRUCTURE_PLACEHOLDER.to_string()]
}

/// One expanded article. `title` is carried over from the idea, not regenerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArticle {
    pub idea_id: String,
    pub title: String,
    pub content: String,
}
