//! Prompt Builder — fills the idea and article templates from profile text.
//!
//! Pure and total: every well-typed input produces a prompt.
//! Templates are filled in a single pass, so substituted text (profiles,
//! idea fields) is embedded verbatim even when it looks like a placeholder.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::generation::prompts::{
    ARTICLE_PROMPT_TEMPLATE, DEFAULT_IDEA_INSTRUCTIONS, IDEA_PROMPT_TEMPLATE,
};
use crate::models::{Idea, Style};
use crate::profiles::ProfileSet;

/// Inspiration section for a style: one headed voice, or all three for `Blend`.
pub fn inspiration_text(profiles: &ProfileSet, style: Style) -> String {
    match profiles.inspiration(style) {
        Some(text) => voice_section(style, text),
        None => Style::NAMED
            .into_iter()
            .map(|voice| voice_section(voice, profiles.inspiration(voice).unwrap_or_default()))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn voice_section(voice: Style, text: &str) -> String {
    format!("### {}'s Voice\n{}", voice.label(), text.trim())
}

/// Builds the idea-brainstorming prompt.
///
/// `count` is range-checked at the HTTP boundary (1–20); it is embedded literally.
pub fn build_idea_prompt(profiles: &ProfileSet, style: Style, count: u32) -> String {
    let instructions = profiles
        .idea_instructions
        .as_deref()
        .map(str::trim)
        .unwrap_or(DEFAULT_IDEA_INSTRUCTIONS);

    let count = count.to_string();
    let inspiration = inspiration_text(profiles, style);

    fill_template(IDEA_PROMPT_TEMPLATE, |name| match name {
        "primary_voice" => Some(profiles.primary.trim()),
        "inspiration" => Some(inspiration.as_str()),
        "style_guidance" => Some(style.guidance()),
        "instructions" => Some(instructions),
        "count" => Some(count.as_str()),
        _ => None,
    })
}

/// Builds the article-expansion prompt for one idea.
///
/// `inspiration` is normally `inspiration_text(profiles, idea.style)`.
pub fn build_article_prompt(idea: &Idea, primary_voice: &str, inspiration: &str) -> String {
    let structure = idea
        .structure
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    fill_template(ARTICLE_PROMPT_TEMPLATE, |name| match name {
        "primary_voice" => Some(primary_voice.trim()),
        "inspiration" => Some(inspiration),
        "style_guidance" => Some(idea.style.guidance()),
        "title" => Some(idea.title.as_str()),
        "style" => Some(idea.style.label()),
        "audience" => Some(idea.audience.as_str()),
        "angle" => Some(idea.angle.as_str()),
        "hook" => Some(idea.hook_example.as_str()),
        "structure" => Some(structure.as_str()),
        _ => None,
    })
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("valid regex"))
}

/// Replaces every `{name}` in `template` in one pass. Unknown names are kept as-is.
fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    placeholder()
        .replace_all(template, |caps: &Captures| match lookup(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
