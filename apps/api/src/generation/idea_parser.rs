//! Idea Parser — extracts structured `Idea` records from the model's markdown reply.
//!
//! Best-effort by contract: each `## Idea N:` block is parsed independently,
//! missing fields fall back to defaults, and a block that cannot be parsed at
//! all is logged and skipped. `parse_ideas` never fails.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::idea::{DEFAULT_AUDIENCE, NO_STRUCTURE_PLACEHOLDER};
use crate::models::{Idea, Style};

#[derive(Debug, Error, PartialEq)]
pub enum IdeaParseError {
    #[error("idea block {index} has no title line")]
    MissingTitle { index: usize },
}

fn idea_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"##[ \t]*Idea[ \t]+\d+[ \t]*:").expect("valid regex"))
}

fn style_field() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| labeled_field(r"Style"))
}

fn audience_field() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| labeled_field(r"(?:Target[ \t]+)?Audience"))
}

fn angle_field() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| labeled_field(r"Angle"))
}

fn hook_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| section_heading(r"Hook[ \t]+Example"))
}

fn structure_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| section_heading(r"4[- ]Step[ \t]+Structure"))
}

fn structure_step() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*\d+\.[ \t]*\*\*([^*\n]+?)\*\*[ \t]*:?[ \t]*(\S.*?)[ \t]*$")
            .expect("valid regex")
    })
}

/// `**Label**: value` (or `**Label:** value`) on a single line.
fn labeled_field(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?im)^[ \t]*\*\*{label}(?:\*\*[ \t]*:|:\*\*)[ \t]*(\S.*?)[ \t]*$"
    ))
    .expect("valid regex")
}

/// A `###` heading line with the given title.
fn section_heading(title: &str) -> Regex {
    Regex::new(&format!(r"(?im)^[ \t]*#{{2,4}}[ \t]*{title}[ \t]*:?[ \t]*$"))
        .expect("valid regex")
}

/// Parses every idea block in `raw`, in order. Unparseable blocks are skipped.
pub fn parse_ideas(raw: &str) -> Vec<Idea> {
    // The first piece is whatever preceded the first heading.
    let segments: Vec<&str> = idea_heading().split(raw).skip(1).collect();

    let ideas: Vec<Idea> = segments
        .iter()
        .enumerate()
        .filter_map(|(index, segment)| match parse_idea_block(segment, index) {
            Ok(idea) => Some(idea),
            Err(e) => {
                warn!("Skipping unparseable idea block: {e}");
                None
            }
        })
        .collect();

    debug!(
        "Parsed {} ideas from {} idea blocks",
        ideas.len(),
        segments.len()
    );

    ideas
}

/// Extracts one idea from the text following an `## Idea N:` heading.
pub fn parse_idea_block(segment: &str, index: usize) -> Result<Idea, IdeaParseError> {
    let title = extract_title(segment).ok_or(IdeaParseError::MissingTitle { index })?;

    let style = capture(style_field(), segment)
        .map(Style::normalize)
        .unwrap_or(Style::Blend);

    let audience = capture(audience_field(), segment)
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string());

    let angle = capture(angle_field(), segment)
        .map(str::to_string)
        .unwrap_or_default();

    let hook_example = extract_hook(segment).unwrap_or_default();

    let mut structure = extract_structure(segment);
    if structure.is_empty() {
        structure.push(NO_STRUCTURE_PLACEHOLDER.to_string());
    }

    Ok(Idea {
        id: Uuid::new_v4().to_string(),
        title,
        style,
        audience,
        angle,
        hook_example,
        structure,
    })
}

fn capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

/// The heading line's text, or else the first plain line before any section
/// heading when the model put the title on its own line.
fn extract_title(segment: &str) -> Option<String> {
    let mut lines = segment.lines();
    let heading_line = clean_title(lines.next()?);
    if !heading_line.is_empty() {
        return Some(heading_line);
    }

    lines
        .map(str::trim)
        .take_while(|line| !line.starts_with('#'))
        .filter(|line| !is_structural_line(line))
        .map(clean_title)
        .find(|t| !t.is_empty())
}

/// Labeled fields, quotes, rules and list items are never titles.
fn is_structural_line(line: &str) -> bool {
    line.is_empty()
        || line.starts_with('>')
        || line.starts_with('-')
        || field_label().is_match(line)
        || list_item().is_match(line)
}

fn field_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\*\*[^*\n]+?(?:\*\*[ \t]*:|:\*\*)").expect("valid regex"))
}

fn list_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.").expect("valid regex"))
}

fn clean_title(line: &str) -> String {
    line.trim()
        .trim_matches(|c: char| c == '*' || c == '"' || c == '[' || c == ']')
        .trim()
        .to_string()
}

/// Text between the end of `heading` and the next heading or `---` rule.
fn section_after<'a>(heading: &Regex, segment: &'a str) -> Option<&'a str> {
    let start = heading.find(segment)?.end();
    let rest = &segment[start..];

    let mut end = rest.len();
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim();
        if offset > 0 && (trimmed.starts_with('#') || trimmed.starts_with("---")) {
            end = offset;
            break;
        }
        offset += line.len();
    }

    Some(&rest[..end])
}

/// The blockquote under `### Hook Example`, with surrounding quote marks removed.
fn extract_hook(segment: &str) -> Option<String> {
    let section = section_after(hook_heading(), segment)?;

    let quote: Vec<&str> = section
        .lines()
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .take_while(|line| line.starts_with('>'))
        .map(|line| line.trim_start_matches('>').trim())
        .filter(|line| !line.is_empty())
        .collect();

    if quote.is_empty() {
        return None;
    }

    let hook = quote
        .join(" ")
        .trim_matches(|c: char| matches!(c, '"' | '\u{201C}' | '\u{201D}'))
        .trim()
        .to_string();

    Some(hook).filter(|h| !h.is_empty())
}

/// Numbered `**Step**: description` items under `### 4-Step Structure`.
/// Items that do not match the pattern are dropped.
fn extract_structure(segment: &str) -> Vec<String> {
    let Some(section) = section_after(structure_heading(), segment) else {
        return Vec::new();
    };

    structure_step()
        .captures_iter(section)
        .filter_map(|c| {
            let name = c.get(1)?.as_str().trim().trim_end_matches(':').trim();
            let description = c.get(2)?.as_str().trim();
            if name.is_empty() {
                return None;
            }
            Some(format!("**{name}**: {description}"))
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const THREE_IDEAS: &str = r#"Here are your ideas!

## Idea 1: The meeting that should have been an email

**Style**: Rita
**Audience**: First-time managers
**Angle**: Calendar bloat is a leadership failure, not a scheduling problem

### Hook Example
> "I cancelled every recurring meeting for a month. Nobody noticed."

### 4-Step Structure
1. **Hook**: Open with the cancellation experiment
2. **Story**: What broke and what didn't
3. **Insight**: Meetings hide unclear ownership
4. **Call to Action**: Ask readers to audit one recurring meeting

---

## Idea 2: What my daughter taught me about feedback

**Style**: Allison
**Audience**: Working parents in leadership roles
**Angle**: Kids give the most honest performance reviews

### Hook Example
> "Mom, you only listen when you're not looking at your phone."

### 4-Step Structure
1. **Hook**: The dinner table comment
2. **Story**: A week of phone-free one-on-ones
3. **Insight**: Attention is the real feedback currency
4. **Call to Action**: Try one meeting without a screen

---

## Idea 3: The 3-question hiring filter

**Style**: Ines
**Audience**: Startup founders hiring their first ten people
**Angle**: Structured interviews beat gut feel even at tiny scale

### Hook Example
> "We stopped asking 'tell me about yourself' and our hiring got better overnight."

### 4-Step Structure
1. **Hook**: The question we dropped
2. **Story**: Two bad hires that gut feel approved
3. **Insight**: Three questions that predict ownership
4. **Call to Action**: Share your best interview question
"#;

    #[test]
    fn test_well_formed_sample_yields_every_field() {
        let ideas = parse_ideas(THREE_IDEAS);
        assert_eq!(ideas.len(), 3);

        let first = &ideas[0];
        assert_eq!(first.title, "The meeting that should have been an email");
        assert_eq!(first.style, Style::Rita);
        assert_eq!(first.audience, "First-time managers");
        assert_eq!(
            first.angle,
            "Calendar bloat is a leadership failure, not a scheduling problem"
        );
        assert_eq!(
            first.hook_example,
            "I cancelled every recurring meeting for a month. Nobody noticed."
        );
        assert_eq!(
            first.structure,
            vec![
                "**Hook**: Open with the cancellation experiment",
                "**Story**: What broke and what didn't",
                "**Insight**: Meetings hide unclear ownership",
                "**Call to Action**: Ask readers to audit one recurring meeting",
            ]
        );

        for idea in &ideas {
            assert_ne!(idea.audience, DEFAULT_AUDIENCE);
            assert!(!idea.angle.is_empty());
            assert!(!idea.hook_example.is_empty());
            assert_eq!(idea.structure.len(), 4);
        }
    }

    #[test]
    fn test_order_and_styles_follow_input() {
        let ideas = parse_ideas(THREE_IDEAS);
        let titles: Vec<&str> = ideas.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "The meeting that should have been an email",
                "What my daughter taught me about feedback",
                "The 3-question hiring filter",
            ]
        );
        let styles: Vec<Style> = ideas.iter().map(|i| i.style).collect();
        assert_eq!(styles, vec![Style::Rita, Style::Allison, Style::Ines]);
    }

    #[test]
    fn test_ids_are_unique_within_batch() {
        let ideas = parse_ideas(THREE_IDEAS);
        assert_ne!(ideas[0].id, ideas[1].id);
        assert_ne!(ideas[1].id, ideas[2].id);
        assert_ne!(ideas[0].id, ideas[2].id);
    }

    #[test]
    fn test_no_headings_yields_empty() {
        assert!(parse_ideas("").is_empty());
        assert!(parse_ideas("Sorry, I can't help with that.").is_empty());
        assert!(parse_ideas("# Idea 1: single hash is not an idea heading").is_empty());
        assert!(parse_ideas("## Idea one: ordinal must be a number").is_empty());
    }

    #[test]
    fn test_preamble_is_discarded() {
        let raw = "**Style**: Rita\nPreamble noise\n## Idea 1: Only idea\n**Audience**: Devs\n";
        let ideas = parse_ideas(raw);
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].title, "Only idea");
        assert_eq!(ideas[0].style, Style::Blend);
    }

    #[test]
    fn test_missing_style_defaults_to_blend() {
        let raw = "## Idea 1: No style here\n**Audience**: Engineers\n**Angle**: Something\n";
        let ideas = parse_ideas(raw);
        assert_eq!(ideas[0].style, Style::Blend);
        assert_eq!(ideas[0].audience, "Engineers");
    }

    #[test]
    fn test_style_is_case_insensitive() {
        for label in ["ALLISON", "allison", "Allison"] {
            let raw = format!("## Idea 1: T\n**Style**: {label}\n");
            let ideas = parse_ideas(&raw);
            assert_eq!(ideas[0].style, Style::Allison, "label {label}");
        }
    }

    #[test]
    fn test_unrecognized_style_defaults_to_blend() {
        let ideas = parse_ideas("## Idea 1: T\n**Style**: Shakespeare\n");
        assert_eq!(ideas[0].style, Style::Blend);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let ideas = parse_ideas("## Idea 1: Bare title\nSome prose without any fields.\n");
        assert_eq!(ideas.len(), 1);
        let idea = &ideas[0];
        assert_eq!(idea.title, "Bare title");
        assert_eq!(idea.audience, DEFAULT_AUDIENCE);
        assert_eq!(idea.angle, "");
        assert_eq!(idea.hook_example, "");
        assert_eq!(idea.structure, vec![NO_STRUCTURE_PLACEHOLDER.to_string()]);
    }

    #[test]
    fn test_unmatched_steps_are_omitted_not_replaced() {
        let raw = "## Idea 1: T\n\n### 4-Step Structure\n1. **Hook**: Opens strong\n2. Story without bold name\n3. **Insight**: The lesson\n";
        let ideas = parse_ideas(raw);
        assert_eq!(
            ideas[0].structure,
            vec!["**Hook**: Opens strong", "**Insight**: The lesson"]
        );
    }

    #[test]
    fn test_colon_inside_bold_label_is_accepted() {
        let raw = "## Idea 1: T\n**Style:** rita\n**Audience:** CTOs\n\n### 4-Step Structure\n1. **Hook:** Bold open\n";
        let ideas = parse_ideas(raw);
        assert_eq!(ideas[0].style, Style::Rita);
        assert_eq!(ideas[0].audience, "CTOs");
        assert_eq!(ideas[0].structure, vec!["**Hook**: Bold open"]);
    }

    #[test]
    fn test_hook_curly_quotes_and_multiline_quote() {
        let raw = "## Idea 1: T\n### Hook Example\n> \u{201C}First line\n> second line\u{201D}\n\n### 4-Step Structure\n";
        let ideas = parse_ideas(raw);
        assert_eq!(ideas[0].hook_example, "First line second line");
    }

    #[test]
    fn test_structure_stops_at_next_heading() {
        let raw = "## Idea 1: T\n### 4-Step Structure\n1. **Hook**: A\n### Notes\n2. **Story**: not part of structure\n";
        let ideas = parse_ideas(raw);
        assert_eq!(ideas[0].structure, vec!["**Hook**: A"]);
    }

    #[test]
    fn test_block_without_title_is_skipped_and_batch_continues() {
        let raw = "## Idea 1:\n**Style**: Rita\n## Idea 2: Survivor\n**Style**: Ines\n";
        let ideas = parse_ideas(raw);
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].title, "Survivor");
        assert_eq!(ideas[0].style, Style::Ines);
    }

    #[test]
    fn test_title_on_line_after_empty_heading_is_used() {
        let raw = "## Idea 1:\n**Stop hiring for culture fit**\n**Style**: Rita\n**Audience**: Founders\n";
        let ideas = parse_ideas(raw);
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].title, "Stop hiring for culture fit");
        assert_eq!(ideas[0].style, Style::Rita);
        assert_eq!(ideas[0].audience, "Founders");
    }

    #[test]
    fn test_title_fallback_skips_fields_and_blank_lines() {
        let raw = "## Idea 1:\n\n**Style**: Ines\nThe 3-question hiring filter\n### Hook Example\n> \"Quote\"\n";
        let idea = parse_idea_block(raw.trim_start_matches("## Idea 1:"), 0).unwrap();
        assert_eq!(idea.title, "The 3-question hiring filter");
        assert_eq!(idea.style, Style::Ines);
    }

    #[test]
    fn test_parse_idea_block_reports_missing_title() {
        assert_eq!(
            parse_idea_block("   \n**Style**: rita", 4),
            Err(IdeaParseError::MissingTitle { index: 4 })
        );
    }

    #[test]
    fn test_bracketed_title_is_cleaned() {
        let ideas = parse_ideas("## Idea 1: **[Stop hiring for culture fit]**\n");
        assert_eq!(ideas[0].title, "Stop hiring for culture fit");
    }
}
