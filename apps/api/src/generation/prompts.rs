// All prompt templates for the Generation module.
// Placeholders use `{name}` and are filled by prompt_builder.rs.

/// System prompt for idea brainstorming. Built from the shared persona fragments.
pub fn idea_system() -> String {
    format!(
        "{persona} You are brainstorming short-form post ideas. \
        Follow the requested markdown output format exactly; it is parsed by software. \
        {fidelity}",
        persona = crate::llm_client::prompts::PERSONA,
        fidelity = crate::llm_client::prompts::VOICE_FIDELITY_INSTRUCTION,
    )
}

/// System prompt for article expansion.
pub fn article_system() -> String {
    format!(
        "{persona} You are expanding a single approved idea into a complete, publish-ready \
        article. Return only the article itself. {fidelity}",
        persona = crate::llm_client::prompts::PERSONA,
        fidelity = crate::llm_client::prompts::VOICE_FIDELITY_INSTRUCTION,
    )
}

/// Default task instructions for idea generation.
/// Replaced wholesale by `idea_instructions.txt` when that profile file exists.
pub const DEFAULT_IDEA_INSTRUCTIONS: &str = "\
Brainstorm fresh, specific post ideas that the primary voice would genuinely write.
- Each idea must target a clearly defined audience and take a distinct angle.
- Draw on the primary voice's lived experience, opinions, and recurring themes.
- Use the inspiration voice(s) for technique (hooks, pacing, structure), not for topics.
- Avoid generic advice, listicles without a point of view, and recycled platitudes.";

/// Idea generation prompt template.
/// Replace: {primary_voice}, {inspiration}, {style_guidance}, {instructions}, {count}
pub const IDEA_PROMPT_TEMPLATE: &str = r#"PRIMARY VOICE (write as this person):
{primary_voice}

INSPIRATION:
{inspiration}

STYLE GUIDANCE: {style_guidance}

TASK:
{instructions}

Generate exactly {count} ideas.

OUTPUT FORMAT (repeat this block for every idea, numbering from 1, separated by a line containing only ---):

## Idea 1: [Short, specific title]

**Style**: [allison | ines | rita | blend]
**Audience**: [Who this post is for]
**Angle**: [The unique perspective or argument]

### Hook Example
> "[The opening line of the post]"

### 4-Step Structure
1. **Hook**: [How the post opens and grabs attention]
2. **Story**: [The personal story or example that carries it]
3. **Insight**: [The lesson or reframe the reader takes away]
4. **Call to Action**: [What the reader is asked to do or reflect on]

---

QUALITY CHECKLIST (verify every idea before answering):
- It sounds like the primary voice, not a generic content creator.
- It is about leadership, careers, entrepreneurship, or workplace culture.
- The hook is specific and would stop someone scrolling.
- No two ideas share the same angle.
- Every field in the format above is filled in."#;

/// Article expansion prompt template.
/// Replace: {primary_voice}, {inspiration}, {style_guidance}, {title}, {style},
///          {audience}, {angle}, {hook}, {structure}
pub const ARTICLE_PROMPT_TEMPLATE: &str = r#"PRIMARY VOICE (write as this person):
{primary_voice}

INSPIRATION:
{inspiration}

STYLE GUIDANCE: {style_guidance}

IDEA TO EXPAND:
Title: {title}
Style: {style}
Audience: {audience}
Angle: {angle}
Hook: {hook}

Structure:
{structure}

ARTICLE REQUIREMENTS:
- Length: 600-1200 words.
- Open with the hook (or a sharper version of it) and follow the structure above.
- Write flowing prose in short paragraphs. Do NOT use bullet lists or numbered lists.
- Stay in the primary voice throughout; use the inspiration only for technique.
- End with a clear call to action for the audience.

Return ONLY the article body. No title line, no preamble, no commentary before or after."#;
